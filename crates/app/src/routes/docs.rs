use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdBookOpen;
use dioxus_free_icons::Icon;
use shared_types::{ProjectDoc, PROJECT_DOCS};
use shared_ui::{
    Card, CardContent, CardDescription, CardHeader, CardTitle, PageHeader, PageSubtitle,
    PageTitle,
};

/// Static project documents, opened in a new tab.
#[component]
pub fn DocsSection() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./docs.css") }

        PageHeader {
            div {
                PageTitle { "Documentación" }
                PageSubtitle { "Documentos de planeación del proyecto" }
            }
        }

        div { class: "docs-grid",
            for doc in PROJECT_DOCS.iter() {
                DocCard { key: "{doc.href}", doc: *doc }
            }
        }
    }
}

#[component]
fn DocCard(doc: ProjectDoc) -> Element {
    rsx! {
        a {
            class: "docs-link",
            href: doc.href,
            target: "_blank",
            rel: "noopener noreferrer",
            Card {
                CardHeader {
                    div { class: "docs-icon",
                        Icon::<LdBookOpen> { icon: LdBookOpen, width: 20, height: 20 }
                    }
                    CardTitle { "{doc.title}" }
                    CardDescription { "{doc.subtitle}" }
                }
                CardContent {
                    span { class: "docs-open", "Abrir documento" }
                }
            }
        }
    }
}
