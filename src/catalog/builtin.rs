//! The built-in apple journey: farm to consumer in nine stations.
//!
//! This is the reference content the game ships with. Alternative journeys
//! can be loaded from JSON through [`serialization`](super::serialization).

use crate::catalog::presentation::{PresentationTable, StationPresentation};
use crate::catalog::station::{Station, StationCatalog};

/// Number of stations in the built-in journey.
pub const APPLE_JOURNEY_LEN: usize = 9;

/// The engine-facing station table for the apple journey.
///
/// The rows are well-formed by construction, so this cannot fail.
pub fn apple_journey_catalog() -> StationCatalog {
    let rows = vec![
        Station::new(1, 1, "Farm", "Where apples grow on trees"),
        Station::new(2, 2, "Harvest", "Picking ripe apples"),
        Station::new(3, 3, "Sort & Clean", "Quality check and cleaning"),
        Station::new(4, 4, "Pack", "Boxing for transport"),
        Station::new(5, 5, "Storage", "Cool storage facility"),
        Station::new(6, 6, "Transport", "Delivery to market"),
        Station::new(7, 7, "Wholesale", "Bulk distribution"),
        Station::new(8, 8, "Retail", "Final sale to customers"),
        Station::new(9, 9, "Consumer", "A happy customer gets the apple"),
    ];
    StationCatalog::new(rows).expect("built-in journey rows are well-formed")
}

/// Display metadata for the apple journey: icons, canvas layout, and the
/// educational substeps shown in guided mode.
pub fn apple_journey_presentation() -> PresentationTable {
    PresentationTable::new(vec![
        StationPresentation::new(1, "tree", 100.0, 150.0).with_substeps([
            "Apple Trees",
            "Flowering",
            "Apple Growth",
            "Ready for Harvest",
        ]),
        StationPresentation::new(2, "apple", 300.0, 100.0).with_substeps([
            "Picking Apples",
            "Quality Check",
            "Collection",
        ]),
        StationPresentation::new(3, "scissors", 500.0, 200.0).with_substeps([
            "Size Sorting",
            "Quality Grading",
            "Washing",
            "Drying",
        ]),
        StationPresentation::new(4, "package", 400.0, 350.0).with_substeps([
            "Boxing",
            "Labeling",
            "Sealing",
        ]),
        StationPresentation::new(5, "refrigerator", 200.0, 400.0).with_substeps([
            "Cool Storage",
            "Humidity Control",
            "Freshness Maintained",
        ]),
        StationPresentation::new(6, "truck", 600.0, 300.0).with_substeps([
            "Loading",
            "Safe Transport",
            "Delivery",
        ]),
        StationPresentation::new(7, "store", 550.0, 450.0).with_substeps([
            "Bulk Sales",
            "Price Setting",
            "Distribution",
        ]),
        StationPresentation::new(8, "store", 350.0, 500.0).with_substeps([
            "Display",
            "Customer Service",
            "Final Sale",
        ]),
        StationPresentation::new(9, "person", 150.0, 500.0).with_substeps([
            "Purchase Complete",
            "Apple Enjoyed",
            "Mission Success",
        ]),
    ])
}

/// The full built-in journey: catalog plus presentation metadata.
pub fn apple_journey() -> (StationCatalog, PresentationTable) {
    (apple_journey_catalog(), apple_journey_presentation())
}
