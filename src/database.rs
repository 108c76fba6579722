//! Embedded redb backend for the Mapping Store
//!
//! One table, named by configuration, holds every mapping:
//!
//! - Key: short id (e.g. "3f9a1c")
//! - Value: JSON-serialized [`UrlMapping`], e.g.
//!   `{"shortId":"3f9a1c","longUrl":"https://example.com"}`

use std::sync::Arc;

use async_trait::async_trait;
use redb::{Database, ReadableDatabase, TableDefinition};

use crate::model::UrlMapping;
use crate::store::{self, MappingStore};

/// Creates or opens the database file and makes sure the mapping table exists
///
/// # Arguments
///
/// * `db_path` - File path of the database (e.g., "data.db")
/// * `table_name` - Name of the mapping table
///
/// # Example
///
/// ```no_run
/// # use shortlink::database::init_db;
/// let db = init_db("data.db", "url_mappings").expect("Failed to initialize database");
/// ```
pub fn init_db(db_path: &str, table_name: &str) -> Result<Database, redb::Error> {
    let db = Database::create(db_path)?;

    // Opening the table inside a write transaction creates it when missing,
    // so the first read never hits TableDoesNotExist.
    let write_txn = db.begin_write()?;
    {
        write_txn.open_table(mapping_table(table_name))?;
    }
    write_txn.commit()?;

    Ok(db)
}

fn mapping_table(name: &str) -> TableDefinition<'_, &'static str, &'static str> {
    TableDefinition::new(name)
}

/// Mapping Store persisted in a redb table
#[derive(Clone)]
pub struct RedbStore {
    db: Arc<Database>,
    table_name: String,
}

impl RedbStore {
    /// Wraps an initialized database. The table must already exist, see [`init_db`].
    pub fn new(db: Arc<Database>, table_name: impl Into<String>) -> Self {
        Self {
            db,
            table_name: table_name.into(),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), redb::Error> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(mapping_table(&self.table_name))?;
            // insert replaces any existing value for the key
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn read(&self, key: &str) -> Result<Option<String>, redb::Error> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(mapping_table(&self.table_name))?;
        let value = table.get(key)?.map(|guard| guard.value().to_owned());
        Ok(value)
    }
}

#[async_trait]
impl MappingStore for RedbStore {
    async fn put(&self, mapping: &UrlMapping) -> store::Result<()> {
        let record_json = serde_json::to_string(mapping)?;
        self.write(&mapping.short_id, &record_json)?;
        Ok(())
    }

    async fn get(&self, short_id: &str) -> store::Result<Option<UrlMapping>> {
        match self.read(short_id)? {
            Some(record_json) => Ok(Some(serde_json::from_str(&record_json)?)),
            None => Ok(None),
        }
    }
}
