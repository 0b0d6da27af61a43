//! Spec model and inheritance resolution for quoin.
//!
//! A *spec* is an ordered, named mapping of configuration fields. Specs live
//! in *namespaces* (one per category: `pages`, `layouts`, `partials`, `vars`,
//! `content`, `navlinks`, ...) and may inherit from another spec in the same
//! namespace via an `inherit` field.
//!
//! # Key concepts
//!
//! - [`SpecValue`] / [`SpecMap`]: the ordered value tree loaded from YAML
//! - [`resolve`]: flattens a spec against its inheritance chain
//! - [`walk`] / [`walk_mut`]: pre-order traversal of a spec tree
//!
//! # Merge semantics
//!
//! Resolution overlays ancestors from oldest to newest, so the spec being
//! resolved always wins, and nearer ancestors win over farther ones. A field
//! whose value is a mapping carrying its own `inherit` key merges
//! field-by-field into the accumulated mapping; every other field replaces
//! wholesale.
//!
//! # Example
//!
//! ```rust
//! use quoin_spec::{load_spec, resolve};
//!
//! let namespace = load_spec(
//!     "base:\n  inherit: null\n  title: Home\npage:\n  inherit: base\n  lang: en\n",
//! )
//! .unwrap();
//!
//! let page = resolve("page", &namespace).unwrap();
//! assert_eq!(page.get("title").unwrap().as_str(), Some("Home"));
//! assert_eq!(page.get("lang").unwrap().as_str(), Some("en"));
//! assert!(!page.contains_key("inherit"));
//! ```

mod convert;
mod error;
mod resolve;
mod types;
mod walk;

pub use convert::{load_spec, spec_value_from_yaml};
pub use error::{SpecError, SpecResult};
pub use resolve::resolve;
pub use types::{INHERIT_KEY, SpecMap, SpecValue};
pub use walk::{walk, walk_mut};
