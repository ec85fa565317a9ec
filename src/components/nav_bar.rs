use super::app::View;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct NavBarProps {
    pub view: View,
    pub on_select: Callback<View>,
}

#[function_component]
pub fn NavBar(props: &NavBarProps) -> Html {
    let tab = |target: View, label: &'static str| {
        let cb = props.on_select.clone();
        let active = props.view == target;
        let style = if active {
            "flex:1; padding:12px; background:#1f6feb; color:#fff; border:none;"
        } else {
            "flex:1; padding:12px; background:transparent; color:#8b949e; border:none;"
        };
        html! { <button style={style} onclick={Callback::from(move |_| cb.emit(target))}>{ label }</button> }
    };
    html! {<nav style="display:flex; border-top:1px solid #30363d; background:#161b22;">
        { tab(View::Home, "Poems") }
        { tab(View::Favorites, "Favorites") }
        { tab(View::Submit, "Write") }
    </nav>}
}
