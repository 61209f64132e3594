use client::{load, LoadState, SectionData};
use dioxus::prelude::*;
use shared_types::SectionId;

use crate::auth::use_auth;
use crate::use_api;

/// Section-owned load state that refetches on every router load ticket.
///
/// The ticket is bumped when the section is activated or refreshed; a load
/// only starts while `id` is the active section.
pub fn use_section_data<D>(id: SectionId) -> Signal<LoadState<D>>
where
    D: SectionData + 'static,
{
    let auth = use_auth();
    let api = use_api();
    let state = use_signal(LoadState::<D>::default);
    let ticket = use_memo(move || auth.router.read().load_ticket());

    use_effect(move || {
        let ticket = ticket();
        if auth.router.peek().active() != id {
            return;
        }
        tracing::debug!(section = %id, ticket, "loading section");
        let api = api.clone();
        let mut router = auth.router;
        spawn(async move {
            load(&api, &auth.session, &state).await;
            router.write().loaded(id);
        });
    });

    state
}
