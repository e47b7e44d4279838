//! Healthcare quartile bands, 2024 baseline.

use rust_decimal_macros::dec;
use std::collections::BTreeMap;

use super::{BenchmarkBand, IndustryProfile, SicRange};
use crate::types::MetricId;

pub const INDUSTRY_KEY: &str = "healthcare";

pub fn profile() -> IndustryProfile {
    IndustryProfile {
        key: INDUSTRY_KEY.to_string(),
        name: "Healthcare".to_string(),
        sub_verticals: [
            "Hospital / Health System",
            "Health Plan / Payer",
            "Physician Practice",
            "Life Sciences",
            "Other",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        sic_ranges: vec![SicRange {
            first: 8000,
            last: 8099,
        }],
    }
}

pub fn bands() -> BTreeMap<MetricId, BenchmarkBand> {
    BTreeMap::from([
        (
            MetricId::ItSpendPctRevenue,
            BenchmarkBand::new(
                [dec!(3.0), dec!(3.8), dec!(5.0)],
                "You are spending significantly more on IT relative to revenue than healthcare peers. This may reflect EHR modernization, regulatory burden, or inefficiency.",
                "Your IT spend is lean relative to revenue. In healthcare, underinvestment can create clinical safety and compliance risk.",
                "Your IT spend as a percentage of revenue is well-aligned with healthcare industry peers.",
                "Avasant / Computer Economics / PEAKE",
            ),
        ),
        (
            MetricId::ItSpendPerEmployee,
            BenchmarkBand::new(
                [dec!(6_000), dec!(8_500), dec!(12_000)],
                "Your per-employee IT cost is above the median. Healthcare has large clinical workforces — check for license waste or over-provisioning.",
                "You are spending less per employee than peers. Ensure clinician productivity tools and EHR support are not suffering.",
                "Your per-employee IT spend is in line with healthcare norms.",
                "Avasant / Computer Economics",
            ),
        ),
        (
            MetricId::ItSpendPctOpex,
            BenchmarkBand::new(
                [dec!(2.0), dec!(2.8), dec!(3.5)],
                "IT is consuming an above-average share of operating expenses. Healthcare OpEx is dominated by clinical labor — evaluate IT cost drivers.",
                "IT's share of OpEx is low. Given regulatory and cybersecurity demands, verify this isn't creating risk.",
                "Your IT share of operating expenses is typical for healthcare organizations.",
                "Definitive Healthcare / Avasant",
            ),
        ),
        (
            MetricId::ItBudgetYoyGrowth,
            BenchmarkBand::new(
                [dec!(10.0), dec!(6.0), dec!(3.0)],
                "Aggressive budget growth signals strong organizational commitment to digital health and modernization.",
                "Flat IT budgets in healthcare are risky given rising cybersecurity threats and regulatory demands.",
                "Your budget growth rate is typical for healthcare organizations.",
                "Gartner HCLS / Guidehouse",
            ),
        ),
        (
            MetricId::ItStaffPctEmployees,
            BenchmarkBand::new(
                [dec!(1.0), dec!(1.8), dec!(2.5)],
                "Your IT headcount ratio is above the median. Healthcare has large non-IT workforces — evaluate whether outsourcing or automation could help.",
                "Your IT staffing is lean even for healthcare. Ensure EHR support, security, and clinical informatics are adequately covered.",
                "Your IT staffing ratio is typical for healthcare organizations.",
                "Avasant / HIMSS",
            ),
        ),
        (
            MetricId::ItStaffingRatio,
            BenchmarkBand::new(
                [dec!(50), dec!(60), dec!(100)],
                "Each IT person supports many users. In healthcare, inadequate IT support directly impacts clinician productivity and patient safety.",
                "You have strong IT support coverage. Verify this is translating into better clinician experience and system reliability.",
                "Your IT support ratio is well-aligned with healthcare peers.",
                "HIMSS / GoWorkWize",
            ),
        ),
        (
            MetricId::RunBudgetPct,
            BenchmarkBand::new(
                [dec!(55), dec!(63), dec!(72)],
                "A high Run budget in healthcare often reflects legacy EHR maintenance and regulatory compliance burden. Evaluate modernization to free capacity.",
                "You are keeping Run costs low — strong position to invest in growth and transformation.",
                "Your Run allocation is typical for healthcare — regulatory and EHR maintenance consume significant budget.",
                "Gartner RGT Framework",
            ),
        ),
        (
            MetricId::GrowBudgetPct,
            BenchmarkBand::new(
                [dec!(25), dec!(20), dec!(15)],
                "Strong Grow investment — you are actively enhancing clinical and operational capabilities ahead of peers.",
                "Your Grow allocation is below peers. Clinical systems and patient experience platforms may fall behind.",
                "Your Grow allocation is in line with healthcare norms.",
                "Gartner RGT Framework",
            ),
        ),
        (
            MetricId::TransformBudgetPct,
            BenchmarkBand::new(
                [dec!(15), dec!(12), dec!(8)],
                "You are investing heavily in transformation — AI, virtual care, and digital front door initiatives set you apart.",
                "Low Transform spending may indicate limited innovation pipeline. Consider AI, telehealth, and interoperability investments.",
                "Your Transform investment is in the typical range for healthcare.",
                "Gartner RGT Framework / CHIME",
            ),
        ),
        (
            MetricId::CloudPctBudget,
            BenchmarkBand::new(
                [dec!(25), dec!(16), dec!(10)],
                "You are cloud-forward for healthcare. Ensure HIPAA-compliant cloud governance and FinOps practices are in place.",
                "Your cloud adoption is below the healthcare median. On-prem infrastructure may be limiting agility and interoperability.",
                "Your cloud investment is on par with healthcare peers.",
                "Nutanix Healthcare ECI / Flexera",
            ),
        ),
        (
            MetricId::CybersecurityPctBudget,
            BenchmarkBand::new(
                [dec!(10.0), dec!(7.0), dec!(4.0)],
                "Strong security investment — critical in healthcare given the rise in ransomware attacks on health systems.",
                "Your security spend is below the median — a serious risk flag. Healthcare is the #1 target for ransomware. Post-Change Healthcare breach, peers are investing heavily.",
                "Your cybersecurity investment is in the typical range for healthcare.",
                "HIMSS Cybersecurity Survey / IANS Research",
            ),
        ),
        (
            MetricId::ItLaborPctBudget,
            BenchmarkBand::new(
                [dec!(40), dec!(48), dec!(55)],
                "Labor is consuming a large share of budget. Healthcare IT requires specialized skills (clinical informatics, EHR analysts) — evaluate managed services for commodity functions.",
                "Lean labor costs — verify clinical IT support and 24/7 coverage are not being compromised.",
                "Your IT labor cost ratio is typical for healthcare.",
                "Avasant / ISG",
            ),
        ),
        (
            MetricId::OutsourcingPctBudget,
            BenchmarkBand::new(
                [dec!(30), dec!(22), dec!(15)],
                "High outsourcing leverage — common in healthcare for cybersecurity, infrastructure, and help desk. Watch for HIPAA compliance in vendor contracts.",
                "Low outsourcing may mean higher internal costs. Evaluate managed services for security, infrastructure, and service desk.",
                "Your outsourcing level is typical for healthcare.",
                "Deloitte GOS / ISG",
            ),
        ),
        (
            MetricId::AppPctBudget,
            BenchmarkBand::new(
                [dec!(45), dec!(38), dec!(30)],
                "Strong application investment — consistent with EHR optimization, clinical decision support, and patient engagement platforms.",
                "Infrastructure-heavy spending may indicate aging on-prem data centers. Consider cloud migration to shift investment toward clinical applications.",
                "Your application vs. infrastructure balance is in line with healthcare trends.",
                "HG Insights / Bain-KLAS",
            ),
        ),
        (
            MetricId::SystemAvailability,
            BenchmarkBand::new(
                [dec!(99.99), dec!(99.95), dec!(99.9)],
                "Excellent availability — critical for patient safety. You are at or near four-nines.",
                "Your availability is below the median. In healthcare, EHR/clinical system downtime directly impacts patient care and safety.",
                "Your availability is on par with healthcare industry norms.",
                "MetricNet / Healthcare SLA standards",
            ),
        ),
        (
            MetricId::ItAttritionRate,
            BenchmarkBand::new(
                [dec!(10), dec!(14), dec!(18)],
                "High attrition is especially costly in healthcare IT where EHR expertise and clinical workflow knowledge are hard to replace.",
                "Strong retention — a competitive advantage given the shortage of healthcare IT talent.",
                "Your IT attrition is in the typical range for healthcare.",
                "LinkedIn / BLS / BambooHR",
            ),
        ),
        (
            MetricId::HelpdeskCostPerTicket,
            BenchmarkBand::new(
                [dec!(18), dec!(30), dec!(45)],
                "Your cost per ticket is above the median. Healthcare tickets are complex (EHR, clinical devices) — look at self-service portals and knowledge bases.",
                "Efficient help desk operations for healthcare. Verify clinician satisfaction and first-call resolution are also strong.",
                "Your help desk cost is in the typical range for healthcare.",
                "MetricNet / HDI / Medsphere",
            ),
        ),
    ])
}
