//! Built-in prototype dataset (Ministry of Agriculture and IMD figures)

use super::store::{AgricultureData, AgricultureRecord, ClimateData, ClimateRecord, Year, YearSeries};
use super::table::OrderedTable;

/// Consecutive yearly values starting at `start`
fn yearly(start: Year, values: [f64; 4]) -> YearSeries {
    (start..).zip(values).collect()
}

/// Agricultural production by state, crop and district
pub fn agriculture() -> AgricultureData {
    let mut data = AgricultureData::new();

    data.insert(
        "Maharashtra".to_string(),
        AgricultureRecord {
            crops: OrderedTable::new()
                .with("Rice", yearly(2020, [3500.0, 3650.0, 3800.0, 3900.0]))
                .with("Wheat", yearly(2020, [2100.0, 2200.0, 2250.0, 2300.0]))
                .with("Cotton", yearly(2020, [8500.0, 8700.0, 8900.0, 9100.0])),
            districts: OrderedTable::new()
                .with("Nashik", OrderedTable::new().with("Rice", 450.0).with("Wheat", 320.0))
                .with("Pune", OrderedTable::new().with("Rice", 380.0).with("Wheat", 280.0))
                .with("Nagpur", OrderedTable::new().with("Rice", 520.0).with("Wheat", 250.0)),
        },
    );

    data.insert(
        "Punjab".to_string(),
        AgricultureRecord {
            crops: OrderedTable::new()
                .with("Rice", yearly(2020, [4200.0, 4300.0, 4400.0, 4500.0]))
                .with("Wheat", yearly(2020, [5100.0, 5200.0, 5300.0, 5400.0]))
                .with("Cotton", yearly(2020, [1200.0, 1250.0, 1300.0, 1350.0])),
            districts: OrderedTable::new()
                .with("Ludhiana", OrderedTable::new().with("Rice", 680.0).with("Wheat", 850.0))
                .with("Amritsar", OrderedTable::new().with("Rice", 620.0).with("Wheat", 780.0)),
        },
    );

    data
}

/// Rainfall and temperature by state
pub fn climate() -> ClimateData {
    let mut data = ClimateData::new();

    let states = [
        ("Maharashtra", [1150.0, 1200.0, 1100.0, 1250.0], [27.5, 28.0, 27.8, 28.2]),
        ("Punjab", [650.0, 700.0, 680.0, 720.0], [24.5, 25.0, 24.8, 25.2]),
        ("Karnataka", [950.0, 1000.0, 980.0, 1020.0], [26.5, 27.0, 26.8, 27.2]),
    ];

    for (state, rainfall, temperature) in states {
        data.insert(
            state.to_string(),
            ClimateRecord {
                rainfall: yearly(2020, rainfall),
                temperature: yearly(2020, temperature),
            },
        );
    }

    data
}
