//! Bundled Netdot resource kinds.
//!
//! Each kind has a `static` [`ResourceSchema`](crate::rest::ResourceSchema)
//! (e.g. [`IPBLOCK`]) and a marker type implementing
//! [`NetdotResource`](crate::rest::NetdotResource) (e.g. [`Ipblock`]) for
//! typed class-level access:
//!
//! ```rust,ignore
//! use netdot_api::rest::resources::Ipblock;
//! use netdot_api::rest::{NetdotResource, SearchCriteria};
//!
//! let blocks = Ipblock::search(&client, SearchCriteria::new().with("address", "10.33.1.66")).await?;
//! for block in &blocks {
//!     println!("{block}"); // 10.33.1.66/32
//! }
//! ```
//!
//! Any other kind the server knows can be described with a custom schema and
//! registered on a [`SchemaRegistry`](crate::rest::SchemaRegistry).

mod asn;
mod device;
mod entity;
mod interface;
mod ipblock;
mod ipblock_status;
mod phys_addr;
mod product;
mod rr;
mod rraddr;
mod site;
mod vlan;
mod zone;

use crate::rest::ResourceSchema;

pub use asn::{Asn, ASN};
pub use device::{Device, DEVICE};
pub use entity::{NetdotEntity, ENTITY};
pub use interface::{Interface, INTERFACE};
pub use ipblock::{Ipblock, IPBLOCK};
pub use ipblock_status::{IpblockStatus, IPBLOCK_STATUS};
pub use phys_addr::{PhysAddr, PHYS_ADDR};
pub use product::{Product, PRODUCT};
pub use rr::{Rr, RR};
pub use rraddr::{RrAddr, RRADDR};
pub use site::{Site, SITE};
pub use vlan::{Vlan, VLAN};
pub use zone::{Zone, ZONE};

/// Schemas of every bundled kind.
pub static BUILTIN: &[&ResourceSchema] = &[
    &ASN,
    &DEVICE,
    &ENTITY,
    &INTERFACE,
    &IPBLOCK,
    &IPBLOCK_STATUS,
    &PHYS_ADDR,
    &PRODUCT,
    &RR,
    &RRADDR,
    &SITE,
    &VLAN,
    &ZONE,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::{FieldKind, NetdotResource};

    #[test]
    fn test_marker_types_point_at_their_schema() {
        assert_eq!(Ipblock::schema().name, "Ipblock");
        assert_eq!(Rr::schema().name, "RR");
        assert_eq!(RrAddr::schema().name, "RRADDR");
        assert_eq!(NetdotEntity::schema().name, "Entity");
    }

    #[test]
    fn test_labels() {
        assert_eq!(IPBLOCK.label_fields, &["address", "prefix"]);
        assert_eq!(IPBLOCK.label_separator, "/");
        assert_eq!(RR.label_fields, &["name", "zone"]);
        assert_eq!(RR.label_separator, ".");
        assert_eq!(INTERFACE.label_fields, &["name", "device"]);
    }

    #[test]
    fn test_device_name_links_to_owner_record() {
        let name = DEVICE.field("name").unwrap();
        assert_eq!(name.kind, FieldKind::Link { target: "RR" });
    }

    #[test]
    fn test_collections() {
        let interfaces = DEVICE.collection("interfaces").unwrap();
        assert_eq!(interfaces.target, "Interface");
        assert_eq!(interfaces.field, "device");

        let records = ZONE.collection("records").unwrap();
        assert_eq!(records.target, "RR");
        assert_eq!(records.field, "zone");
    }

    #[test]
    fn test_links_to_bundled_kinds_name_existing_fields() {
        for schema in BUILTIN {
            for collection in schema.collections {
                if let Some(target) = BUILTIN.iter().find(|s| s.name == collection.target) {
                    let field = target.field(collection.field).unwrap();
                    assert_eq!(field.link_target(), Some(schema.name));
                }
            }
        }
    }
}
