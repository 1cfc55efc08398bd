use crate::domain::stores::StoreType;

/// Retailer that always appears in the store filter
///
/// Stores on this list are shown even when the current listing has no
/// tournaments for them, so the filter keeps a stable shape week to week.
/// The name is the canonical display name; the city is where the store
/// usually hosts events when the API omits a location.
#[derive(Debug, Clone, PartialEq)]
pub struct PermanentStore {
    pub name: &'static str,
    pub city: &'static str,
    pub store_type: StoreType,
}

impl PermanentStore {
    pub const fn new(name: &'static str, city: &'static str, store_type: StoreType) -> Self {
        Self {
            name,
            city,
            store_type,
        }
    }
}

const PERMANENT_STORES: &[PermanentStore] = &[
    PermanentStore::new("Metagame", "Budapest", StoreType::Metagame),
    PermanentStore::new("Remetebarlang", "Budapest", StoreType::Remetebarlang),
    PermanentStore::new("SAS és KOS", "Budapest", StoreType::SasEsKos),
    PermanentStore::new("Pöttyös Zebra", "Budapest", StoreType::PottyosZebra),
    PermanentStore::new("Sport Kártya", "Budapest", StoreType::SportKartya),
    PermanentStore::new("Játék Céh", "Debrecen", StoreType::JatekCeh),
    PermanentStore::new("Ratmayer", "Győr", StoreType::Ratmayer),
];

/// Get the known retailers in display order
pub fn permanent_stores() -> &'static [PermanentStore] {
    PERMANENT_STORES
}
