use crate::domain::tool::{Tool, ToolStatus};

/// Interactive tool catalog. Retired tools keep their definitions so old
/// links can be redirected, but they never reach the manifest.
pub fn tool_catalog() -> Vec<Tool> {
    vec![
        Tool {
            slug: "management-fee-calculator".into(),
            name: "Management Fee Calculator".into(),
            status: ToolStatus::Active,
            updated: Some("2024-05-02".into()),
        },
        Tool {
            slug: "carry-waterfall-modeler".into(),
            name: "Carry Waterfall Modeler".into(),
            status: ToolStatus::Active,
            updated: Some("2024-07-18".into()),
        },
        Tool {
            slug: "fund-expense-benchmarks".into(),
            name: "Fund Expense Benchmarks".into(),
            status: ToolStatus::Active,
            updated: None,
        },
        Tool {
            slug: "irr-quick-check".into(),
            name: "IRR Quick Check".into(),
            status: ToolStatus::Retired,
            updated: Some("2022-09-30".into()),
        },
    ]
}
