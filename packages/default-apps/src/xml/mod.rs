//! XML navigation and field extraction.

mod decode;
mod extract;
mod utils;

pub use decode::decode_document;
pub use extract::{get_bool, get_string};
pub use utils::{
    element_children, get_tag_name, has_tag_prefix, matching_children, node_content, node_lang,
    tag_matches,
};
