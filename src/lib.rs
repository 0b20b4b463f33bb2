//! catalog-search
//!
//! Tiered text search over a static catalog: exact name, name prefix,
//! token prefixes over name/description/creator, then the closest name by
//! edit distance. The first stage with results wins.
//!
//! ```no_run
//! use catalog_search::dataset::Dataset;
//! use catalog_search::search::SearchEngine;
//!
//! let body = r#"[{"nome": "Toyota", "criador": "Kiichiro Toyoda", "ano": 1937, "descricao": "Japanese automaker"}]"#;
//! let dataset = Dataset::from_json("inline", body).unwrap();
//! let result = SearchEngine::new().search("toyotaa", dataset.records());
//! assert_eq!(result.items[0].name, "Toyota");
//! ```

pub mod dataset;
pub mod error;
pub mod http;
pub mod render;
pub mod search;
