use serde::Serialize;

use crate::names;
use crate::types::{RawAddress, RawUser};

/// Presentation-ready user. City is not carried over from the source address.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRecord {
    pub id: i64,
    pub formatted_name: String,
    pub address: DisplayAddress,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DisplayAddress {
    pub street: String,
    pub suite: String,
    pub zipcode: String,
}

impl From<RawAddress> for DisplayAddress {
    fn from(address: RawAddress) -> Self {
        Self {
            street: address.street,
            suite: address.suite,
            zipcode: address.zipcode,
        }
    }
}

impl From<RawUser> for DisplayRecord {
    fn from(user: RawUser) -> Self {
        Self {
            id: user.id,
            formatted_name: names::format_name(&user.name),
            address: user.address.into(),
        }
    }
}
