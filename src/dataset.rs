//! Input dataset: clients and their sensor readings.
//!
//! A dataset is an ordered sequence of [`Client`]s, each owning an ordered
//! sequence of [`Instance`] readings. Ids are expected to be dense and
//! 1-based; the engine tolerates violations (see
//! [`ConsistencyPolicy`](crate::config::ConsistencyPolicy)), while
//! [`Dataset::check_submission`] enforces the full input contract up front.

use serde::{Deserialize, Serialize};

use crate::error::FedTrustError;

/// 1-based client identifier.
pub type ClientId = u32;

/// 1-based instance identifier, unique within a client.
pub type InstanceId = u32;

/// Raw reading as entered: a number, numeric text, or nothing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reading {
    /// Already-numeric value.
    Number(f64),
    /// Text that should contain a number.
    Text(String),
    /// Field left blank.
    #[default]
    Empty,
}

impl Reading {
    /// Parse the reading, coercing anything malformed or non-finite to 0.
    pub fn value(&self) -> f64 {
        self.parse().unwrap_or(0.0)
    }

    /// Parse the reading, returning `None` when it is blank, non-numeric,
    /// or non-finite.
    pub fn parse(&self) -> Option<f64> {
        let v = match self {
            Reading::Number(v) => *v,
            Reading::Text(s) => s.trim().parse::<f64>().ok()?,
            Reading::Empty => return None,
        };
        v.is_finite().then_some(v)
    }
}

impl From<f64> for Reading {
    fn from(v: f64) -> Self {
        Reading::Number(v)
    }
}

impl From<&str> for Reading {
    fn from(s: &str) -> Self {
        Reading::Text(s.to_string())
    }
}

/// One sensor reading belonging to a client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    /// Position-matching 1-based id.
    pub id: InstanceId,
    /// Raw reading.
    #[serde(default)]
    pub value: Reading,
}

impl Instance {
    /// Create an instance from anything convertible into a [`Reading`].
    pub fn new(id: InstanceId, value: impl Into<Reading>) -> Self {
        Self {
            id,
            value: value.into(),
        }
    }
}

/// A simulated participant and its readings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Client {
    /// Position-matching 1-based id.
    pub id: ClientId,
    /// Ordered readings.
    #[serde(default)]
    pub instances: Vec<Instance>,
}

impl Client {
    /// Create a client from plain values, numbering instances from 1.
    pub fn from_values(id: ClientId, values: &[f64]) -> Self {
        Self {
            id,
            instances: values
                .iter()
                .enumerate()
                .map(|(j, &v)| Instance::new(j as InstanceId + 1, v))
                .collect(),
        }
    }

    /// Number of readings (`n_k`).
    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    /// Parsed reading values, malformed entries coerced to 0.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.instances.iter().map(|inst| inst.value.value())
    }
}

/// Ordered collection of clients handed to the engine.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Clients in submission order.
    pub clients: Vec<Client>,
}

impl Dataset {
    /// Wrap an existing client sequence.
    pub fn new(clients: Vec<Client>) -> Self {
        Self { clients }
    }

    /// Build a dataset with dense 1-based client and instance ids, one row
    /// of readings per client.
    pub fn from_grid(rows: Vec<Vec<f64>>) -> Self {
        let clients = rows
            .iter()
            .enumerate()
            .map(|(i, row)| Client::from_values(i as ClientId + 1, row))
            .collect();
        Self { clients }
    }

    /// Parse a dataset from JSON of the form
    /// `{"clients":[{"id":1,"instances":[{"id":1,"value":0.95}]}]}`.
    pub fn from_json(json: &str) -> Result<Self, FedTrustError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Number of clients.
    pub fn len(&self) -> usize {
        self.clients.len()
    }

    /// Whether the dataset has no clients.
    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    /// Copy of the dataset with each client's instances sorted by id.
    pub fn normalized(&self) -> Self {
        let clients = self
            .clients
            .iter()
            .map(|client| {
                let mut instances = client.instances.clone();
                instances.sort_by_key(|inst| inst.id);
                Client {
                    id: client.id,
                    instances,
                }
            })
            .collect();
        Self { clients }
    }

    /// Submission-time checks: at least one client, every client has
    /// readings, every reading is a finite non-negative number.
    pub fn check_submission(&self) -> Result<(), FedTrustError> {
        if self.clients.is_empty() {
            return Err(FedTrustError::EmptyDataset);
        }

        for client in &self.clients {
            if client.instances.is_empty() {
                return Err(FedTrustError::EmptyClient {
                    client_id: client.id,
                });
            }

            for inst in &client.instances {
                let reason = match inst.value.parse() {
                    None if inst.value == Reading::Empty => "missing value".to_string(),
                    None => format!("not a finite number: {:?}", inst.value),
                    Some(v) if v < 0.0 => format!("negative value {}", v),
                    Some(_) => continue,
                };
                return Err(FedTrustError::InvalidReading {
                    client_id: client.id,
                    instance_id: inst.id,
                    reason,
                });
            }
        }

        Ok(())
    }
}
