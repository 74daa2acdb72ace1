//! Embedded content documents.
//!
//! All authored content (one JSON document per page topic, plus the source
//! registry) is baked into the binary at compile time - the rendered site
//! never loads external data files.

/// Macro to embed content documents at compile time as text.
///
/// Generates:
/// - Public constants for each embedded document
/// - `get_embedded_doc(topic)` function for lookup
/// - `list_topics()` function for discovery
macro_rules! embedded_content {
    ($($topic:expr => $const_name:ident : $path:expr),* $(,)?) => {
        $(
            pub const $const_name: &str =
                include_str!(concat!("../../content/", $path));
        )*

        pub fn get_embedded_doc(topic: &str) -> Option<&'static str> {
            match topic {
                $( $topic => Some($const_name), )*
                _ => None,
            }
        }

        pub fn list_topics() -> Vec<&'static str> {
            vec![ $( $topic, )* ]
        }
    };
}

embedded_content! {
    // One document per routed page
    "home" => EMBEDDED_HOME: "home.json",
    "company" => EMBEDDED_COMPANY: "company.json",
    "experience" => EMBEDDED_EXPERIENCE: "experience.json",
    "critical-thinking" => EMBEDDED_CRITICAL_THINKING: "critical_thinking.json",
    "on-this-subject" => EMBEDDED_ON_THIS_SUBJECT: "on_this_subject.json",

    // Footnote registry shared by all pages
    "sources" => EMBEDDED_SOURCES: "sources.json",
}
