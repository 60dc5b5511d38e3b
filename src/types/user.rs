use serde::Deserialize;

/// A user as served by the catalog endpoint. `username`, `email` and any
/// other extra fields are ignored.
#[derive(Deserialize, Debug, Clone)]
pub struct RawUser {
    pub id: i64,
    pub name: String,
    pub address: RawAddress,
}

#[derive(Deserialize, Debug, Clone)]
pub struct RawAddress {
    pub street: String,
    pub suite: String,
    pub zipcode: String,
    #[allow(dead_code)]
    pub city: String,
}
