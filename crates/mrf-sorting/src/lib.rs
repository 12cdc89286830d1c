//! Materials recovery facility (MRF) model
//!
//! Collected waste is one of three kinds, and each kind has a single place
//! in the facility where it is processed. Sorting personnel perform three
//! distinct tasks: general segregation, cleaning one material, and baling.
//!
//! # Example
//!
//! ```rust
//! use mrf_sorting::{Personnel, Station, WasteItem};
//!
//! let item = WasteItem::recyclable("PET Soda Bottles", 1.2, "PET (#1)");
//! let report = item.process_at_facility();
//! assert_eq!(report.station, Station::SortingSection);
//!
//! let sorter = Personnel::new("Ate Mila");
//! let (action, added) = sorter.record_baled(45.5);
//! assert_eq!(added, 45.5);
//! assert!(action.to_string().contains("finished baling"));
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::float_cmp))]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

use std::fmt;

use tracing::info;

/// Area of the facility where a kind of waste ends up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Station {
    /// Organic waste becomes fertilizer here
    CompostingStation,
    /// Recyclables are segregated and baled here
    SortingSection,
    /// Residual waste waits here for the landfill truck
    HaulingArea,
}

impl Station {
    /// Display name of the station
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CompostingStation => "Composting Station",
            Self::SortingSection => "Sorting Section",
            Self::HaulingArea => "Hauling Area",
        }
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A collected waste item
#[derive(Debug, Clone, PartialEq)]
pub enum WasteItem {
    /// Food scraps, leaves and other compostables
    Biodegradable {
        /// What the item is
        description: String,
        /// Weight in kilograms
        weight_kg: f64,
    },
    /// Material that can be sold once sorted
    Recyclable {
        /// What the item is
        description: String,
        /// Weight in kilograms
        weight_kg: f64,
        /// Material grade, e.g. `"PET (#1)"` or `"Cardboard"`
        material: String,
    },
    /// Anything that can only go to the landfill
    Residual {
        /// What the item is
        description: String,
        /// Weight in kilograms
        weight_kg: f64,
    },
}

impl WasteItem {
    /// Creates a biodegradable item
    #[must_use]
    pub fn biodegradable(description: impl Into<String>, weight_kg: f64) -> Self {
        Self::Biodegradable {
            description: description.into(),
            weight_kg,
        }
    }

    /// Creates a recyclable item of the given material
    #[must_use]
    pub fn recyclable(
        description: impl Into<String>,
        weight_kg: f64,
        material: impl Into<String>,
    ) -> Self {
        Self::Recyclable {
            description: description.into(),
            weight_kg,
            material: material.into(),
        }
    }

    /// Creates a residual item
    #[must_use]
    pub fn residual(description: impl Into<String>, weight_kg: f64) -> Self {
        Self::Residual {
            description: description.into(),
            weight_kg,
        }
    }

    /// What the item is
    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            Self::Biodegradable { description, .. }
            | Self::Recyclable { description, .. }
            | Self::Residual { description, .. } => description,
        }
    }

    /// Weight in kilograms
    #[must_use]
    pub const fn weight_kg(&self) -> f64 {
        match self {
            Self::Biodegradable { weight_kg, .. }
            | Self::Recyclable { weight_kg, .. }
            | Self::Residual { weight_kg, .. } => *weight_kg,
        }
    }

    /// Kind label used in reports
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Biodegradable { .. } => "Biodegradable Waste",
            Self::Recyclable { .. } => "Recyclable Waste",
            Self::Residual { .. } => "Residual Waste",
        }
    }

    /// Where this item is processed
    #[must_use]
    pub const fn station(&self) -> Station {
        match self {
            Self::Biodegradable { .. } => Station::CompostingStation,
            Self::Recyclable { .. } => Station::SortingSection,
            Self::Residual { .. } => Station::HaulingArea,
        }
    }

    /// Routes the item through the facility
    #[must_use]
    pub fn process_at_facility(&self) -> ProcessingReport {
        let outcome = match self {
            Self::Biodegradable { .. } => {
                "Directed to the Composting area to create organic fertilizer.".to_string()
            }
            Self::Recyclable { material, .. } => {
                format!("Segregated by type ({material}) and baled for selling.")
            }
            Self::Residual { .. } => {
                "Stored temporarily and scheduled for hauling to the Sanitary Landfill."
                    .to_string()
            }
        };
        let report = ProcessingReport {
            station: self.station(),
            kind: self.kind(),
            description: self.description().to_string(),
            weight_kg: self.weight_kg(),
            outcome,
        };
        info!(
            station = %report.station,
            item = %report.description,
            weight_kg = report.weight_kg,
            "processed waste item"
        );
        report
    }
}

/// What happened to one item at the facility
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingReport {
    /// Station that handled the item
    pub station: Station,
    /// Kind label of the item
    pub kind: &'static str,
    /// Item description
    pub description: String,
    /// Item weight in kilograms
    pub weight_kg: f64,
    /// Outcome sentence
    pub outcome: String,
}

impl fmt::Display for ProcessingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "-> [{}] Processing {}: {} ({} kg).",
            self.station,
            self.kind,
            self.description,
            Kg(self.weight_kg)
        )?;
        write!(f, "   * Result: {}", self.outcome)
    }
}

/// Weight printed with at least one decimal, so 3 kg reads "3.0"
#[derive(Debug, Clone, Copy)]
pub struct Kg(pub f64);

impl fmt::Display for Kg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 && self.0.is_finite() {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Processes a batch in order
#[must_use]
pub fn process_all<'a>(
    items: impl IntoIterator<Item = &'a WasteItem>,
) -> Vec<ProcessingReport> {
    items
        .into_iter()
        .map(WasteItem::process_at_facility)
        .collect()
}

/// Total weight of a batch in kilograms
#[must_use]
pub fn total_weight(items: &[WasteItem]) -> f64 {
    items.iter().map(WasteItem::weight_kg).sum()
}

/// The intake used by the `sort` demonstration
#[must_use]
pub fn sample_intake() -> Vec<WasteItem> {
    vec![
        WasteItem::biodegradable("Leftover food scraps", 5.5),
        WasteItem::recyclable("PET Soda Bottles", 1.2, "PET (#1)"),
        WasteItem::residual("Dirty diapers and ceramics", 3.0),
        WasteItem::biodegradable("Dried leaves and branches", 8.0),
    ]
}

/// Task a sorter was given
#[derive(Debug, Clone, PartialEq)]
pub enum SortingTask {
    /// Segregation at the main intake
    General,
    /// Sorting and cleaning of one material
    Material(String),
    /// A finished bale recorded for inventory
    Baled(f64),
}

/// A logged personnel action
#[derive(Debug, Clone, PartialEq)]
pub struct PersonnelAction {
    /// Who did it
    pub name: String,
    /// What they did
    pub task: SortingTask,
}

impl fmt::Display for PersonnelAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Personnel Action] {} ", self.name)?;
        match &self.task {
            SortingTask::General => {
                f.write_str("is performing general waste segregation at the main intake area.")
            }
            SortingTask::Material(material) => {
                write!(f, "is focusing on sorting and cleaning the {material} materials.")
            }
            SortingTask::Baled(weight) => write!(
                f,
                "finished baling a batch. Recording {} kg for inventory.",
                Kg(*weight)
            ),
        }
    }
}

/// A member of the sorting crew
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Personnel {
    name: String,
}

impl Personnel {
    /// Creates a crew member
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Crew member's name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    fn act(&self, task: SortingTask) -> PersonnelAction {
        let action = PersonnelAction {
            name: self.name.clone(),
            task,
        };
        info!(%action, "personnel action");
        action
    }

    /// General segregation at the intake
    pub fn sort_general(&self) -> PersonnelAction {
        self.act(SortingTask::General)
    }

    /// Sorting and cleaning of one material
    pub fn sort_material(&self, material: &str) -> PersonnelAction {
        self.act(SortingTask::Material(material.to_string()))
    }

    /// Bales a batch and returns the action to display
    pub fn bale(&self, weight_kg: f64) -> PersonnelAction {
        self.act(SortingTask::Baled(weight_kg))
    }

    /// Bales a batch and returns the action with the weight added to
    /// inventory
    pub fn record_baled(&self, weight_kg: f64) -> (PersonnelAction, f64) {
        (self.bale(weight_kg), weight_kg)
    }
}
