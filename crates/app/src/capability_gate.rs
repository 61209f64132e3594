use crate::auth::use_role;
use dioxus::prelude::*;
use shared_types::{has_capability, Capability};

/// Check if the current user holds a capability.
pub fn use_capability(required: Capability) -> bool {
    has_capability(use_role(), required)
}

/// Conditionally render children based on the user's role.
/// Shows `fallback` if the role lacks the capability.
#[component]
pub fn CapabilityGate(required: Capability, fallback: Element, children: Element) -> Element {
    if use_capability(required) {
        rsx! { {children} }
    } else {
        rsx! { {fallback} }
    }
}
