//! Lookup-table resolution: record key to display name.

use std::collections::HashMap;

use log::warn;

use crate::core::domain::Relation;
use crate::core::error::NormalizeError;
use crate::parsing::record_parser::RawRecord;

/// One lookup table, mapping opaque record keys to display names.
#[derive(Debug, Clone, Default)]
pub struct LookupTable {
    table: String,
    names: HashMap<String, String>,
}

impl LookupTable {
    /// Build a lookup from the raw records of a table, taking `name_field`
    /// as the display name. Records without a name are skipped.
    pub fn from_records(table: &str, name_field: &str, records: &[RawRecord]) -> Self {
        let names = records
            .iter()
            .filter_map(|r| r.string(name_field).map(|name| (r.id.clone(), name)))
            .collect();
        Self {
            table: table.to_string(),
            names,
        }
    }

    /// Resolve a linked field to its display name.
    ///
    /// A key with no entry is not fatal: the row keeps participating in
    /// aggregation under an unresolved label, and the miss is logged.
    pub fn resolve(&self, relation: &Relation) -> Option<String> {
        let key = relation.first()?;
        match self.names.get(key) {
            Some(name) => Some(name.clone()),
            None => {
                warn!(
                    "{}",
                    NormalizeError::MissingLookup {
                        table: self.table.clone(),
                        key: key.to_string(),
                    }
                );
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// The full set of lookup tables a planning snapshot needs.
#[derive(Debug, Clone, Default)]
pub struct Lookups {
    pub roles: LookupTable,
    pub missions: LookupTable,
    pub clients: LookupTable,
    pub scenarios: LookupTable,
    pub explorers: LookupTable,
}

impl Lookups {
    pub fn from_batches(
        roles: &[RawRecord],
        missions: &[RawRecord],
        clients: &[RawRecord],
        scenarios: &[RawRecord],
        explorers: &[RawRecord],
    ) -> Self {
        Self {
            roles: LookupTable::from_records("Roles", "Role", roles),
            missions: LookupTable::from_records("Mission", "Mission", missions),
            clients: LookupTable::from_records("Clients", "Client", clients),
            scenarios: LookupTable::from_records("Scenarios", "Scenario", scenarios),
            explorers: LookupTable::from_records("EXPLORER", "EXPLORER", explorers),
        }
    }
}
