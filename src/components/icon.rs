use yew::prelude::*;

use crate::context::AppContext;

#[derive(Properties, PartialEq)]
pub struct IconProps {
    /// @mdi/js export name, e.g. "mdiArrowLeft"
    pub name: AttrValue,
    #[prop_or(24)]
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let ctx = use_context::<AppContext>().unwrap_or_default();

    match ctx.icons.get(&props.name) {
        Some(path) => {
            let size = props.size.to_string();
            html! {
                <svg
                    class={classes!("icon", props.class.clone())}
                    width={size.clone()}
                    height={size}
                    viewBox="0 0 24 24"
                    aria-hidden="true"
                >
                    <path d={path} fill="currentColor" />
                </svg>
            }
        }
        None => {
            log::warn!("⚠️ Unknown icon: {}", props.name);
            html! {}
        }
    }
}
