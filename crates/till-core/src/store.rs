//! Durable storage for the till.
//!
//! Two records live under a single data directory: `data.json` holds the
//! catalog and ledger as one `{ "products": [...], "sales": [...] }` object,
//! and `login.json` holds the single credential slot. Credential fields are
//! base64-encoded; that obscures a casual directory listing and nothing
//! more, it is not a security boundary.

use crate::catalog::Catalog;
use crate::error::TillError;
use crate::ledger::Ledger;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File name of the catalog + ledger record.
pub const DATA_FILE: &str = "data.json";
/// File name of the credential record.
pub const LOGIN_FILE: &str = "login.json";

/// The stored username/password pair. At most one account exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl Credential {
    /// Compare a login attempt against this credential.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

#[derive(Serialize)]
struct DataRecord<'a> {
    products: &'a Catalog,
    sales: &'a Ledger,
}

#[derive(Default, Deserialize)]
struct StoredData {
    #[serde(default)]
    products: Catalog,
    #[serde(default)]
    sales: Ledger,
}

#[derive(Serialize, Deserialize)]
struct StoredLogin {
    username: String,
    password: String,
}

/// Gateway to the durable records, rooted at a data directory.
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, TillError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| {
            TillError::PersistenceWrite(format!("cannot create {}: {e}", dir.display()))
        })?;
        Ok(Self { dir })
    }

    /// The data directory this store writes under.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Serialize the catalog and ledger into the single durable record.
    ///
    /// Must be called after every mutation whose effect should survive a
    /// restart: catalog upsert/import, sale completion, ledger clear.
    pub fn save_data(&self, catalog: &Catalog, ledger: &Ledger) -> Result<(), TillError> {
        let record = DataRecord {
            products: catalog,
            sales: ledger,
        };
        let json = serde_json::to_string_pretty(&record)
            .map_err(|e| TillError::PersistenceWrite(e.to_string()))?;
        let path = self.dir.join(DATA_FILE);
        fs::write(&path, json)
            .map_err(|e| TillError::PersistenceWrite(format!("{}: {e}", path.display())))
    }

    /// Restore the catalog and ledger from the durable record.
    ///
    /// A missing record is not an error: it yields empty collections. A
    /// malformed record is reported as `PersistenceRead`; the session loader
    /// degrades that to empty collections so the user is never blocked.
    pub fn load_data(&self) -> Result<(Catalog, Ledger), TillError> {
        let path = self.dir.join(DATA_FILE);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Ok((Catalog::new(), Ledger::new()))
            }
            Err(e) => {
                return Err(TillError::PersistenceRead(format!(
                    "{}: {e}",
                    path.display()
                )))
            }
        };
        let data: StoredData = serde_json::from_str(&raw)
            .map_err(|e| TillError::PersistenceRead(format!("{}: {e}", path.display())))?;
        Ok((data.products, data.sales))
    }

    /// Store the single credential, replacing any previous one.
    pub fn save_credential(&self, cred: &Credential) -> Result<(), TillError> {
        let record = StoredLogin {
            username: STANDARD.encode(&cred.username),
            password: STANDARD.encode(&cred.password),
        };
        let json = serde_json::to_string_pretty(&record)
            .map_err(|e| TillError::PersistenceWrite(e.to_string()))?;
        let path = self.dir.join(LOGIN_FILE);
        fs::write(&path, json)
            .map_err(|e| TillError::PersistenceWrite(format!("{}: {e}", path.display())))
    }

    /// Load the stored credential; `None` when unset or unparsable.
    pub fn load_credential(&self) -> Option<Credential> {
        let raw = fs::read_to_string(self.dir.join(LOGIN_FILE)).ok()?;
        let record: StoredLogin = serde_json::from_str(&raw).ok()?;
        Some(Credential {
            username: decode_field(&record.username)?,
            password: decode_field(&record.password)?,
        })
    }
}

fn decode_field(encoded: &str) -> Option<String> {
    let bytes = STANDARD.decode(encoded).ok()?;
    String::from_utf8(bytes).ok()
}
