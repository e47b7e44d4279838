//! Financial Services quartile bands, 2024 baseline.

use rust_decimal_macros::dec;
use std::collections::BTreeMap;

use super::{BenchmarkBand, IndustryProfile, SicRange};
use crate::types::MetricId;

pub const INDUSTRY_KEY: &str = "financial_services";

pub fn profile() -> IndustryProfile {
    IndustryProfile {
        key: INDUSTRY_KEY.to_string(),
        name: "Financial Services".to_string(),
        sub_verticals: [
            "Banking",
            "Insurance",
            "Asset Management",
            "Fintech",
            "Other",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        sic_ranges: vec![SicRange {
            first: 6000,
            last: 6999,
        }],
    }
}

pub fn bands() -> BTreeMap<MetricId, BenchmarkBand> {
    BTreeMap::from([
        (
            MetricId::ItSpendPctRevenue,
            BenchmarkBand::new(
                [dec!(5.7), dec!(7.9), dec!(11.4)],
                "You are spending significantly more on IT relative to revenue than peers. This may indicate inefficiency, technical debt, or a strategic heavy-investment phase.",
                "Your IT spend is lean relative to revenue. Verify this isn't creating underinvestment risk in security, modernization, or talent.",
                "Your IT spend as a percentage of revenue is well-aligned with Financial Services peers.",
                "Gartner / Avasant Computer Economics",
            ),
        ),
        (
            MetricId::ItSpendPerEmployee,
            BenchmarkBand::new(
                [dec!(18_000), dec!(35_000), dec!(55_000)],
                "Your per-employee IT cost is above the median. Check for over-provisioning, license waste, or high support costs.",
                "You are spending less per employee than peers. Ensure end-user experience and productivity tooling are not suffering.",
                "Your per-employee IT spend is in line with Financial Services norms.",
                "Gartner / SouthState",
            ),
        ),
        (
            MetricId::ItSpendPctOpex,
            BenchmarkBand::new(
                [dec!(8.5), dec!(11.2), dec!(15.0)],
                "IT is consuming a large share of operating expenses. Evaluate whether this reflects strategic investment or cost inefficiency.",
                "IT's share of OpEx is low. This could indicate efficiency or potential underinvestment.",
                "Your IT share of operating expenses is typical for the industry.",
                "Gartner / SouthState",
            ),
        ),
        (
            MetricId::ItBudgetYoyGrowth,
            BenchmarkBand::new(
                [dec!(8.0), dec!(4.7), dec!(2.0)],
                "Aggressive budget growth signals strong organizational commitment to technology.",
                "Flat or declining IT budgets may constrain your ability to modernize and compete.",
                "Your budget growth rate is typical for Financial Services firms.",
                "Gartner / SouthState",
            ),
        ),
        (
            MetricId::ItStaffPctEmployees,
            BenchmarkBand::new(
                [dec!(8.0), dec!(12.3), dec!(17.0)],
                "Your IT headcount ratio is above the median. Evaluate whether automation, outsourcing, or process improvement could reduce this.",
                "Your IT staffing is lean. Ensure critical capabilities (security, architecture) are not understaffed.",
                "Your IT staffing ratio is typical for Financial Services.",
                "Gartner / GoWorkWize",
            ),
        ),
        (
            MetricId::ItStaffingRatio,
            BenchmarkBand::new(
                [dec!(50), dec!(70), dec!(100)],
                "Each IT person supports many users. You may be understaffed relative to peers, risking service quality.",
                "You have rich IT support coverage per employee. Verify this level of investment is delivering proportional value.",
                "Your IT support ratio is well-aligned with industry peers.",
                "GoWorkWize / TalentMSH",
            ),
        ),
        (
            MetricId::RunBudgetPct,
            BenchmarkBand::new(
                [dec!(55), dec!(67), dec!(78)],
                "A high Run budget leaves little room for innovation. Consider modernization to free up capacity.",
                "You are keeping Run costs low, freeing budget for growth and transformation. Strong position.",
                "Your Run allocation is typical — most firms spend about two-thirds maintaining existing systems.",
                "Gartner / SouthState",
            ),
        ),
        (
            MetricId::GrowBudgetPct,
            BenchmarkBand::new(
                [dec!(27), dec!(22), dec!(15)],
                "Strong Grow investment — you are actively enhancing capabilities ahead of peers.",
                "Your Grow allocation is below peers. Existing capabilities may fall behind competitive expectations.",
                "Your Grow allocation is in line with industry norms.",
                "Gartner / SouthState",
            ),
        ),
        (
            MetricId::TransformBudgetPct,
            BenchmarkBand::new(
                [dec!(18), dec!(11), dec!(7)],
                "You are investing heavily in transformation — a strong signal of digital maturity.",
                "Low Transform spending may indicate limited innovation pipeline or excessive technical debt consuming resources.",
                "Your Transform investment is in the typical range for Financial Services.",
                "Gartner / SouthState",
            ),
        ),
        (
            MetricId::CloudPctBudget,
            BenchmarkBand::new(
                [dec!(40), dec!(32), dec!(20)],
                "You are cloud-forward relative to peers. Ensure you have strong FinOps practices to manage cloud cost growth.",
                "Your cloud adoption is below the median. Legacy infrastructure may be dragging on agility and cost efficiency.",
                "Your cloud investment is on par with Financial Services peers.",
                "Gartner / DataStackHub",
            ),
        ),
        (
            MetricId::CybersecurityPctBudget,
            BenchmarkBand::new(
                [dec!(14.0), dec!(9.6), dec!(6.0)],
                "Strong security investment. Ensure spend is outcome-driven, not just compliance-driven.",
                "Your security spend is below the median — a risk flag in a highly regulated, highly targeted industry.",
                "Your cybersecurity investment is in the typical range for Financial Services.",
                "IANS Research / Deloitte",
            ),
        ),
        (
            MetricId::ItLaborPctBudget,
            BenchmarkBand::new(
                [dec!(30), dec!(38), dec!(48)],
                "Labor is consuming a large share of budget. Consider automation, offshore leverage, or managed services.",
                "Lean labor costs — verify this isn't creating key-person risk or quality issues.",
                "Your IT labor cost ratio is typical for the industry.",
                "Gartner / SouthState",
            ),
        ),
        (
            MetricId::OutsourcingPctBudget,
            BenchmarkBand::new(
                [dec!(30), dec!(18), dec!(10)],
                "High outsourcing leverage can improve cost efficiency but watch for vendor dependency and knowledge loss.",
                "Low outsourcing may mean higher internal costs but better control. Evaluate selective outsourcing for commodity functions.",
                "Your outsourcing level is typical for Financial Services.",
                "Gartner / ConnectBit",
            ),
        ),
        (
            MetricId::AppPctBudget,
            BenchmarkBand::new(
                [dec!(65), dec!(60), dec!(50)],
                "Strong application investment relative to infrastructure — consistent with modern, cloud-native strategies.",
                "Infrastructure-heavy spending may indicate legacy on-prem footprint. Consider cloud migration to shift spend toward applications.",
                "Your application vs. infrastructure balance is in line with industry trends.",
                "McKinsey",
            ),
        ),
        (
            MetricId::SystemAvailability,
            BenchmarkBand::new(
                [dec!(99.99), dec!(99.95), dec!(99.9)],
                "Excellent availability — you are at or near four-nines, which is the gold standard.",
                "Your availability is below the median. In Financial Services, even small downtime gaps translate to material revenue and reputational risk.",
                "Your availability is on par with industry norms.",
                "Industry standard SLA benchmarks",
            ),
        ),
        (
            MetricId::ItAttritionRate,
            BenchmarkBand::new(
                [dec!(10), dec!(15), dec!(22)],
                "High attrition is costly and risks institutional knowledge loss. Review compensation, culture, and career paths.",
                "Strong retention — a competitive advantage in the talent-scarce IT market.",
                "Your IT attrition is in the typical range for Financial Services.",
                "Payscale / BambooHR",
            ),
        ),
        (
            MetricId::HelpdeskCostPerTicket,
            BenchmarkBand::new(
                [dec!(12), dec!(22), dec!(40)],
                "Your cost per ticket is above the median. Look at self-service adoption, knowledge base quality, and first-call resolution rates.",
                "Efficient help desk operations. Verify quality metrics (CSAT, FCR) are also strong.",
                "Your help desk cost is in the typical range for the industry.",
                "MetricNet / HDI",
            ),
        ),
    ])
}
