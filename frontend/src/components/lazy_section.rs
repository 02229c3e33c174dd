use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use onlybulls_landing::reveal::{RevealGate, RevealOptions, ViewportObserver};

#[derive(Properties, PartialEq)]
pub struct LazySectionProps {
    pub children: Children,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(0.1)]
    pub threshold: f64,
    #[prop_or(AttrValue::Static("50px"))]
    pub root_margin: AttrValue,
    /// Shown until the section scrolls into view.
    #[prop_or_default]
    pub fallback: Option<Html>,
}

/// Mounts its children the first time the container nears the viewport and
/// keeps them mounted afterwards.
#[function_component(LazySection)]
pub fn lazy_section(props: &LazySectionProps) -> Html {
    let container = use_node_ref();
    let revealed = use_state(|| false);

    {
        let container = container.clone();
        let revealed = revealed.clone();
        let options = RevealOptions {
            threshold: props.threshold,
            root_margin: props.root_margin.to_string(),
        };
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if *revealed {
                    Box::new(|| ())
                } else if !ViewportObserver::is_supported() {
                    revealed.set(true);
                    Box::new(|| ())
                } else if let Some(element) = container.cast::<web_sys::Element>() {
                    let gate: Rc<RefCell<Option<RevealGate<ViewportObserver>>>> = Rc::new(RefCell::new(None));
                    let on_change = {
                        let gate = Rc::downgrade(&gate);
                        let revealed = revealed.clone();
                        move |is_intersecting: bool| {
                            let Some(gate) = gate.upgrade() else { return };
                            let just_revealed = gate
                                .borrow_mut()
                                .as_mut()
                                .map_or(false, |gate| gate.observe(is_intersecting));
                            if just_revealed {
                                revealed.set(true);
                            }
                        }
                    };
                    match ViewportObserver::observe(&element, &options, on_change) {
                        Ok(observer) => {
                            *gate.borrow_mut() = Some(RevealGate::new(observer));
                            Box::new(move || {
                                gate.borrow_mut().take();
                            })
                        }
                        Err(e) => {
                            log::warn!("Could not observe lazy section: {:?}", e);
                            revealed.set(true);
                            Box::new(|| ())
                        }
                    }
                } else {
                    Box::new(|| ())
                };
                destructor
            },
            // The gate outlives the reveal; it is only released on unmount.
            (props.threshold.to_bits(), props.root_margin.clone()),
        );
    }

    let content = if *revealed {
        html! { <>{ for props.children.iter() }</> }
    } else {
        props.fallback.clone().unwrap_or_default()
    };

    html! {
        <div ref={container} id={props.id.clone()} class={props.class.clone()}>
            { content }
        </div>
    }
}
