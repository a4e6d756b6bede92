use leptos::*;
use std::rc::Rc;

use crate::{
    application::{
        DashboardController, StateCell,
        use_cases::{
            DashboardPage, DashboardView, EVENTS_HEADING, LOADING_PLACEHOLDER, PAGE_TITLE,
            PRICE_TABLE_HEADER, PRICES_HEADING, render_dashboard,
        },
    },
    domain::state::DashboardState,
    infrastructure::http::{ApiConfig, DashboardHttpClient},
};

/// Feed results land in a signal so every write re-renders the page.
impl StateCell for RwSignal<DashboardState> {
    fn update_state(&self, f: impl FnOnce(&mut DashboardState)) {
        // A disposed signal means the view is gone; nothing left to update.
        let _ = self.try_update(f);
    }
}

/// 🛢️ Root component: owns the dashboard state for one page load.
///
/// Both feeds are requested once while the component is set up; anything
/// still pending when it is unmounted is aborted.
#[component]
pub fn App(#[prop(optional)] config: Option<ApiConfig>) -> impl IntoView {
    let state = create_rw_signal(DashboardState::new());
    let client = Rc::new(DashboardHttpClient::new(config.unwrap_or_default()));
    let controller = Rc::new(DashboardController::new(client, state));

    controller.initialize(|task| spawn_local(task));
    on_cleanup(move || controller.teardown());

    view! { <DashboardScreen state=state /> }
}

/// Either the loading placeholder or the full page, derived from `state`.
#[component]
pub fn DashboardScreen(#[prop(into)] state: Signal<DashboardState>) -> impl IntoView {
    let rendered = create_memo(move |_| state.with(render_dashboard));

    move || match rendered.get() {
        DashboardView::Loading => view! { <div>{LOADING_PLACEHOLDER}</div> }.into_view(),
        DashboardView::Loaded(page) => view! { <LoadedDashboard page=page /> }.into_view(),
    }
}

#[component]
fn LoadedDashboard(page: DashboardPage) -> impl IntoView {
    let DashboardPage { price_rows, event_items } = page;

    view! {
        <div class="App">
            <h1>{PAGE_TITLE}</h1>
            <h2>{PRICES_HEADING}</h2>
            <table>
                <thead>
                    <tr>
                        <th>{PRICE_TABLE_HEADER[0]}</th>
                        <th>{PRICE_TABLE_HEADER[1]}</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || price_rows.clone()
                        key=|row| row.key.clone()
                        children=|row| {
                            view! {
                                <tr>
                                    <td>{row.date}</td>
                                    <td>{row.price}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <h2>{EVENTS_HEADING}</h2>
            <ul>
                <For
                    each=move || event_items.clone()
                    key=|item| item.key.clone()
                    children=|item| view! { <li>{item.text}</li> }
                />
            </ul>
        </div>
    }
}
