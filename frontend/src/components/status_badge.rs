use shared::TournamentStatus;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusBadgeProps {
    pub status: TournamentStatus,
}

/// Colored pill for a tournament status.
#[function_component(StatusBadge)]
pub fn status_badge(props: &StatusBadgeProps) -> Html {
    let color = match props.status {
        TournamentStatus::Open => classes!("bg-green-100", "text-green-800"),
        TournamentStatus::Closed => classes!("bg-gray-100", "text-gray-800"),
        TournamentStatus::InProgress => classes!("bg-blue-100", "text-blue-800"),
        TournamentStatus::Completed => classes!("bg-purple-100", "text-purple-800"),
    };
    html! {
        <span class={classes!(
            "inline-flex", "px-2", "py-1", "text-xs", "font-medium", "rounded-full", color
        )}>
            {props.status.label()}
        </span>
    }
}
