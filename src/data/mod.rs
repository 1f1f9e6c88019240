/// Data layer: core types, mock generation, filtering, aggregation, export.
///
/// Architecture:
/// ```text
///  MockConfig + seed
///        │
///        ▼
///   ┌──────────┐
///   │ generate  │  seeded draws → FeedbackSet
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ FeedbackSet  │  Vec<FeedbackRecord>, service index
///   └─────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  service + date predicates → filtered indices
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐     ┌──────────┐
///   │ aggregate  │     │  export   │  CSV / JSON report, CSV re-import
///   └───────────┘     └──────────┘
/// ```

pub mod aggregate;
pub mod export;
pub mod filter;
pub mod generate;
pub mod model;
