//! Override tables driving name and department resolution.
//!
//! All tables are immutable after construction and passed explicitly into the
//! resolver and linker, so tests can supply alternate data. The built-in
//! tables cover the current Helldivers 2 stratagem set; folders and names
//! without an entry pass through unchanged.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

/// Errors detected while constructing a [`ResolverTables`].
#[derive(Debug, Error)]
pub enum TableError {
    /// A canonical name appears in both reclassification lists, making its
    /// department ambiguous.
    #[error("\"{0}\" is listed as both an objective and a common stratagem")]
    AmbiguousReclassification(String),
}

/// Immutable lookup tables for name renames, department mapping,
/// reclassification, and shared icons.
#[derive(Debug, Clone)]
pub struct ResolverTables {
    dept_map: HashMap<String, String>,
    rename_map: HashMap<String, String>,
    objectives: HashSet<String>,
    common: HashSet<String>,
    /// Alias name -> source name, in declaration order.
    shared_icons: Vec<(String, String)>,
}

impl ResolverTables {
    /// Build a table set, validating that the reclassification lists are
    /// disjoint.
    pub fn new(
        dept_map: HashMap<String, String>,
        rename_map: HashMap<String, String>,
        objectives: HashSet<String>,
        common: HashSet<String>,
        shared_icons: Vec<(String, String)>,
    ) -> Result<Self, TableError> {
        if let Some(name) = objectives.intersection(&common).next() {
            return Err(TableError::AmbiguousReclassification(name.clone()));
        }
        Ok(Self {
            dept_map,
            rename_map,
            objectives,
            common,
            shared_icons,
        })
    }

    /// The built-in tables for the current stratagem set.
    pub fn builtin() -> Self {
        let dept_map = BUILTIN_DEPT_MAP
            .iter()
            .map(|&(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let rename_map = BUILTIN_RENAMES
            .iter()
            .map(|&(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let objectives = BUILTIN_OBJECTIVES.iter().map(|s| s.to_string()).collect();
        let common = BUILTIN_COMMON.iter().map(|s| s.to_string()).collect();
        let shared_icons = BUILTIN_SHARED_ICONS
            .iter()
            .map(|&(k, v)| (k.to_string(), v.to_string()))
            .collect();

        // The built-in lists are disjoint; a violation here is a programming
        // error in the tables above.
        Self::new(dept_map, rename_map, objectives, common, shared_icons)
            .expect("built-in reclassification lists overlap")
    }

    /// Canonical display name for a raw asset stem. Unmapped stems are
    /// already canonical.
    pub fn canonical_name<'a>(&'a self, raw: &'a str) -> &'a str {
        self.rename_map.get(raw).map(String::as_str).unwrap_or(raw)
    }

    /// Department label derived from a folder name. Unmapped folders keep
    /// their own name as the label.
    pub fn derived_dept<'a>(&'a self, folder: &'a str) -> &'a str {
        self.dept_map
            .get(folder)
            .map(String::as_str)
            .unwrap_or(folder)
    }

    pub fn is_objective(&self, canonical: &str) -> bool {
        self.objectives.contains(canonical)
    }

    pub fn is_common(&self, canonical: &str) -> bool {
        self.common.contains(canonical)
    }

    /// (alias, source) pairs for stratagems that reuse another stratagem's
    /// rendered icon.
    pub fn shared_icons(&self) -> &[(String, String)] {
        &self.shared_icons
    }
}

impl Default for ResolverTables {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Folder -> department overrides. Warbond and ship-module folders keep their
/// own names via the resolver's identity fallback, so only real renames are
/// listed.
const BUILTIN_DEPT_MAP: &[(&str, &str)] = &[("General Stratagems", "Common")];

/// Raw SVG stem -> canonical stratagem name, for assets whose file name lacks
/// the model designation or uses different casing.
const BUILTIN_RENAMES: &[(&str, &str)] = &[
    // General Stratagems
    ("Orbital Illumination Flare", "Illumination Flare"),
    ("Seismic Probe", "SE-45 Seismic Probe"),
    // Patriotic Administration Center
    ("Machine Gun", "MG-43 Machine Gun"),
    ("Anti-Materiel Rifle", "APW-1 Anti-Materiel Rifle"),
    ("Stalwart", "M-105 Stalwart"),
    ("Expendable Anti-Tank", "EAT-17 Expendable Anti-Tank"),
    ("Recoilless Rifle", "GR-8 Recoilless Rifle"),
    ("Flamethrower", "FLAM-40 Flamethrower"),
    ("Autocannon", "AC-8 Autocannon"),
    ("Heavy Machine Gun", "MG-206 Heavy Machine Gun"),
    ("Airburst Rocket Launcher", "RL-77 Airburst Rocket Launcher"),
    ("Commando", "MLS-4X Commando"),
    ("Railgun", "RS-422 Railgun"),
    ("Spear", "FAF-14 Spear"),
    ("Speargun", "S-11 Speargun"),
    // Engineering Bay
    ("Anti-Personnel Minefield", "MD-6 Anti-Personnel Minefield"),
    ("Supply Pack", "B-1 Supply Pack"),
    ("Grenade Launcher", "GL-21 Grenade Launcher"),
    ("Laser Cannon", "LAS-98 Laser Cannon"),
    ("Incendiary Mines", "MD-I4 Incendiary Mines"),
    ("Ballistic Shield Backpack", "SH-20 Ballistic Shield Backpack"),
    ("Arc Thrower", "ARC-3 Arc Thrower"),
    ("Anti-Tank Mines", "MD-17 Anti-Tank Mines"),
    ("Quasar Cannon", "LAS-99 Quasar Cannon"),
    ("Shield Generator Pack", "SH-32 Shield Generator Pack"),
    ("Gas Mine", "MD-8 Gas Mines"),
    ("Guard Dog Rover", "AX/LAS-5 Guard Dog Rover"),
    // Bridge
    ("HMG Emplacement", "E/MG-101 HMG Emplacement"),
    ("Shield Generator Relay", "FX-12 Shield Generator Relay"),
    ("Tesla Tower", "A/ARC-3 Tesla Tower"),
    ("Grenadier Battlement", "E/GL-21 Grenadier Battlement"),
    // Robotics Workshop
    ("Machine Gun Sentry", "A/MG-43 Machine Gun Sentry"),
    ("Gatling Sentry", "A/G-16 Gatling Sentry"),
    ("Mortar Sentry", "A/M-12 Mortar Sentry"),
    ("Autocannon Sentry", "A/AC-8 Autocannon Sentry"),
    ("EMS Mortar Sentry", "A/M-23 EMS Mortar Sentry"),
    ("Rocket Sentry", "AX/MLS-4X Rocket Sentry"),
    ("Guard Dog", "AX/AR-23 Guard Dog"),
    ("Patriot Exosuit", "EXO-45 Patriot Exosuit"),
    ("Emancipator Exosuit", "EXO-49 Emancipator Exosuit"),
    // Warbonds
    ("Sterilizer", "TX-41 Sterilizer"),
    ("Directional Shield", "SH-51 Directional Shield"),
    ("Anti-Tank Emplacement", "E/AT-12 Anti-Tank Emplacement"),
    ("Flame Sentry", "A/FLAM-40 Flame Sentry"),
    ("Hellbomb Portable", "B-100 Portable Hellbomb"),
    ("Hover Pack", "LIFT-860 Hover Pack"),
    ("One True Flag", "CQC-1 One True Flag"),
    ("Guard Dog K-9", "AX/ARC-3 Guard Dog K-9"),
    ("Laser Sentry", "A/LAS-98 Laser Sentry"),
    ("Warp Pack", "LIFT-182 Warp Pack"),
    ("Epoch", "PLAS-45 Epoch"),
    ("Solo Silo", "MS-11 Solo Silo"),
    ("Expendable Napalm", "EAT-700 Expendable Napalm"),
    ("Guard Dog Breath", "AX/TX-13 Guard Dog Dog Breath"),
    ("Maxigun", "M-1000 Maxigun"),
    ("Guard Dog Hot Dog", "AX/FLAM-75 Guard Dog Hot Dog"),
    ("Defoliation Tool", "CQC-9 Defoliation Tool"),
    // Hangar
    ("Fast Recon Vehicle", "M-102 Fast Recon Vehicle"),
    ("Eagle 110MM Rocket Pods", "Eagle 110mm Rocket Pods"),
    ("Eagle 500KG Bomb", "Eagle 500kg Bomb"),
    // Orbital Cannons (case normalization)
    ("Orbital 120MM HE Barrage", "Orbital 120mm HE Barrage"),
    ("Orbital 380MM HE Barrage", "Orbital 380mm HE Barrage"),
];

/// Mission-objective stratagems whose department is forced to "Objectives"
/// regardless of source folder.
const BUILTIN_OBJECTIVES: &[&str] = &[
    "SSSD Delivery",
    "Prospecting Drill",
    "Super Earth Flag",
    "Hellbomb",
    "Upload Data",
    "SE-45 Seismic Probe",
    "Illumination Flare",
    "SEAF Artillery",
    "Dark Fluid Vessel",
    "Tectonic Drill",
    "Hive Breaker Drill",
];

/// Always-available stratagems whose department is forced to "Common".
const BUILTIN_COMMON: &[&str] = &["Reinforce", "SOS Beacon", "Resupply", "Eagle Rearm"];

/// Stratagems with no rendered icon of their own; each reuses the icon of the
/// named source stratagem.
const BUILTIN_SHARED_ICONS: &[(&str, &str)] = &[("SSSD Delivery", "Upload Data")];
