pub mod center;
pub mod global_context;
pub mod left;
pub mod pages;
pub mod top_header;

use leptos::prelude::*;

use crate::system::auth::context::Session;
use center::Center;
use left::{Left, Sidebar};
use top_header::TopHeader;

/// Signed-in application shell.
///
/// ```text
/// +------------------------------+
/// |          TopHeader           |
/// +------------------------------+
/// |  Sidebar  |      Center      |
/// +------------------------------+
/// ```
#[component]
pub fn Shell(session: Session) -> impl IntoView {
    let role = session.role();

    view! {
        <div class="app-layout">
            <TopHeader session=session.clone() />
            <div class="app-body">
                <Left>
                    <Sidebar role=role />
                </Left>
                <Center session=session />
            </div>
        </div>
    }
}
