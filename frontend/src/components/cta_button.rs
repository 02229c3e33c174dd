use yew::prelude::*;

use onlybulls_landing::analytics;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CtaVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CtaSize {
    Sm,
    #[default]
    Md,
    Lg,
}

#[derive(Properties, PartialEq)]
pub struct CtaButtonProps {
    pub children: Children,
    #[prop_or_default]
    pub variant: CtaVariant,
    #[prop_or_default]
    pub size: CtaSize,
    #[prop_or_default]
    pub loading: bool,
    #[prop_or_default]
    pub full_width: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or(AttrValue::Static("button"))]
    pub button_type: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Both label and location are needed for the click to be tracked.
    #[prop_or_default]
    pub analytics_label: Option<AttrValue>,
    #[prop_or_default]
    pub analytics_location: Option<AttrValue>,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

pub fn button_classes(variant: CtaVariant, size: CtaSize, full_width: bool) -> Classes {
    let variant = match variant {
        CtaVariant::Primary => "cta-primary",
        CtaVariant::Secondary => "cta-secondary",
        CtaVariant::Outline => "cta-outline",
    };
    let size = match size {
        CtaSize::Sm => "cta-sm",
        CtaSize::Md => "cta-md",
        CtaSize::Lg => "cta-lg",
    };
    classes!("cta-button", variant, size, full_width.then(|| "cta-full"))
}

#[function_component(CtaButton)]
pub fn cta_button(props: &CtaButtonProps) -> Html {
    let onclick = {
        let label = props.analytics_label.clone();
        let location = props.analytics_location.clone();
        let onclick = props.onclick.clone();
        Callback::from(move |e: MouseEvent| {
            if let (Some(label), Some(location)) = (&label, &location) {
                analytics::tracker().track_cta_click(label, location);
            }
            onclick.emit(e);
        })
    };

    let mut class = button_classes(props.variant, props.size, props.full_width);
    class.extend(props.class.clone());

    html! {
        <button
            type={props.button_type.clone()}
            {class}
            disabled={props.disabled || props.loading}
            {onclick}
        >
            if props.loading {
                <span class="cta-spinner"></span>
                {"Loading..."}
            } else {
                { for props.children.iter() }
            }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_reflect_variant_size_and_width() {
        let classes = button_classes(CtaVariant::Outline, CtaSize::Lg, true);
        for class in ["cta-button", "cta-outline", "cta-lg", "cta-full"] {
            assert!(classes.contains(class), "missing {}", class);
        }

        let classes = button_classes(CtaVariant::default(), CtaSize::default(), false);
        assert!(classes.contains("cta-primary"));
        assert!(classes.contains("cta-md"));
        assert!(!classes.contains("cta-full"));
    }
}
