//! Object mapping for Netdot resources.
//!
//! This module turns Netdot's REST+XML interface into typed, lazily
//! resolved, dirty-tracked objects:
//!
//! - **[`FieldDescriptor`]**: coercion of one field between its wire string
//!   and a typed [`Value`]
//! - **[`XmlDocument`]**: decoding of response bodies, tolerant to control
//!   characters
//! - **[`ResourceSchema`]** and **[`SchemaRegistry`]**: static per-kind
//!   metadata (fields, views, label, reverse relations)
//! - **[`Entity`]**: an instance of any kind, with lazy resolution, dirty
//!   tracking, save/delete and view rendering
//! - **[`ResourceHandle`]** and **[`NetdotResource`]**: search and lookup
//! - **[`resources`]**: the bundled kinds
//!
//! # Example
//!
//! ```rust,ignore
//! use netdot_api::rest::resources::{Device, Ipblock};
//! use netdot_api::rest::{NetdotResource, SearchCriteria};
//! use netdot_api::RestClient;
//!
//! let client = RestClient::new(&config)?;
//!
//! // Search; every result is resolved and clean
//! let blocks = Ipblock::search(&client, SearchCriteria::new().with("address", "10.33.1.66")).await?;
//! for mut block in blocks {
//!     println!("{}", block.display(&client, "brief").await?);
//! }
//!
//! // Create
//! let mut device = Device::create()?;
//! device.set(&client, "sysname", "core-1").await?;
//! device.save(&client).await?;
//! println!("created {:?}", device.id());
//!
//! // Delete
//! device.delete(&client).await?;
//! ```

mod decoder;
mod entity;
mod errors;
mod field;
mod path;
mod registry;
mod resource;
pub mod resources;
mod schema;
mod tracking;
mod value;

pub use decoder::{Attributes, XmlDocument};
pub use entity::{Entity, LabelFuture};
pub use errors::{DecodeError, FieldError, ResourceError};
pub use field::{FieldDescriptor, FieldKind};
pub use path::{build_path, ResourceOperation};
pub use registry::SchemaRegistry;
pub use resource::{NetdotResource, ResourceHandle, SearchCriteria};
pub use schema::{Collection, LabelFn, PreSaveHook, ResourceSchema, View, ALL_VIEW};
pub use tracking::{FieldValues, StateSnapshot};
pub use value::Value;
