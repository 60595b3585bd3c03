//! Built-in reference data for the AV Digital Proving Ground cost model
//!
//! Tables are kept as plain tuples so the display order is the source order.

/// Nominal base monthly cost; the base component costs add up to this
pub const BASE_TOTAL: f64 = 100.0;

/// (name, cost, percentage, description)
pub const BASE_COSTS: &[(&str, f64, f64, &str)] = &[
    (
        "Cloud Computing (AWS/Azure)",
        25.0,
        25.0,
        "EC2 instances, Lambda functions, API Gateway",
    ),
    (
        "GPU Computing",
        18.0,
        18.0,
        "P3/G4 instances for ML training and inference",
    ),
    (
        "Data Storage",
        12.0,
        12.0,
        "S3 storage for simulation data and assets",
    ),
    (
        "Unreal Engine License",
        8.0,
        8.0,
        "Unreal Engine subscription for simulation",
    ),
    (
        "Simulation Software",
        15.0,
        15.0,
        "Specialized AV simulation tools and licenses",
    ),
    (
        "Data Transfer/Bandwidth",
        7.0,
        7.0,
        "Data ingress/egress and CDN costs",
    ),
    (
        "Asset Management",
        5.0,
        5.0,
        "Asset versioning and management systems",
    ),
    (
        "Security & Compliance",
        3.0,
        3.0,
        "Security monitoring and compliance tools",
    ),
    (
        "Platform Operations",
        4.0,
        4.0,
        "Load balancing, monitoring, logging",
    ),
    (
        "Remaining Balance",
        3.0,
        3.0,
        "Buffer for unexpected costs and scaling",
    ),
];

/// (label, monthly cost, hourly rate, dominant cost driver)
pub const SCALING_SCENARIOS: &[(&str, f64, f64, &str)] = &[
    (
        "Light Usage (10 hours/month)",
        100.0,
        10.0,
        "GPU compute and licensing",
    ),
    (
        "Medium Usage (50 hours/month)",
        350.0,
        7.0,
        "Balanced compute and storage",
    ),
    (
        "Heavy Usage (200 hours/month)",
        1200.0,
        6.0,
        "Heavy GPU and data processing",
    ),
    (
        "Enterprise Usage (500 hours/month)",
        2800.0,
        5.6,
        "Enterprise licensing and support",
    ),
    (
        "Continuous Usage (720 hours/month)",
        4500.0,
        6.25,
        "Infrastructure and data transfer",
    ),
];

/// (name, incremental cost, description)
pub const ADDITIONAL_CONSIDERATIONS: &[(&str, f64, &str)] = &[
    (
        "Data Ingress from Vehicles",
        50.0,
        "Real-time data streaming from test vehicles",
    ),
    (
        "Machine Learning Model Training",
        200.0,
        "Training AI models for autonomous driving",
    ),
    (
        "Multi-Region Deployment",
        150.0,
        "Global deployment for reduced latency",
    ),
    (
        "High Availability & Disaster Recovery",
        100.0,
        "Backup systems and failover mechanisms",
    ),
    (
        "Compliance & Audit Requirements",
        75.0,
        "Meeting automotive industry regulations",
    ),
    (
        "Third-Party API Integrations",
        25.0,
        "Integration with vehicle systems and sensors",
    ),
    (
        "Custom Development & Maintenance",
        300.0,
        "Custom feature development and updates",
    ),
    (
        "User Training & Support",
        50.0,
        "Training materials and support staff",
    ),
    (
        "Simulation Asset Licensing",
        100.0,
        "High-fidelity 3D models and environments",
    ),
    (
        "Performance Optimization",
        75.0,
        "Performance tuning and optimization services",
    ),
];

pub const DEFAULT_INFLUENCES: &str =
    "Various factors including usage patterns and system requirements.";

pub const DEFAULT_OPTIMIZATION_TIPS: &str = "Monitor usage and optimize based on actual needs.";

/// (component name, what influences the cost, optimization tips)
pub const COMPONENT_INSIGHTS: &[(&str, &str, &str)] = &[
    (
        "Cloud Computing (AWS/Azure)",
        "Instance types, usage duration, auto-scaling policies, and region selection.",
        "Use reserved instances for predictable workloads, implement auto-scaling, and choose the right instance types for your workload.",
    ),
    (
        "GPU Computing",
        "Instance types (P3/G4), usage patterns, training vs inference workloads, and parallelization efficiency.",
        "Use spot instances for non-critical workloads, implement efficient batching, and consider serverless GPU options.",
    ),
    (
        "Data Storage",
        "Storage volume, access patterns, retention policies, and storage class selection.",
        "Use lifecycle policies to move data to cheaper storage tiers, implement data compression, and clean up unused data regularly.",
    ),
    (
        "Unreal Engine License",
        "Number of seats, usage frequency, and subscription tier selected.",
        "Consider usage-based licensing, evaluate if all features are needed, and negotiate enterprise pricing.",
    ),
    (
        "Simulation Software",
        "License type, number of concurrent users, and feature set required.",
        "Bundle licenses when possible, use concurrent licensing efficiently, and evaluate open-source alternatives.",
    ),
    (
        "Data Transfer/Bandwidth",
        "Data volume, transfer frequency, geographic distribution, and caching efficiency.",
        "Use CDN caching, implement data compression, and minimize cross-region transfers.",
    ),
    (
        "Asset Management",
        "Asset count, versioning complexity, and access patterns.",
        "Implement efficient caching strategies, use version control effectively, and automate asset cleanup.",
    ),
    (
        "Security & Compliance",
        "Compliance requirements, security level needed, and audit frequency.",
        "Use managed security services, implement automation, and avoid over-provisioning.",
    ),
    (
        "Platform Operations",
        "System complexity, monitoring depth, and automation level.",
        "Use managed services where possible, implement efficient monitoring, and automate routine tasks.",
    ),
    (
        "Remaining Balance",
        "Usage variability, growth plans, and risk tolerance.",
        "Monitor usage patterns, implement cost alerts, and regularly review and optimize spending.",
    ),
];
