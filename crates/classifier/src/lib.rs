//! Heuristic investor classification.
//!
//! Disclosed counterparty names are free text, so the investor category is
//! derived by case-insensitive substring matching against an ordered
//! catalogue of keyword sets. The catalogue order is part of the contract:
//! a name like "XYZ Family Trust International Holdings" matches both FII
//! and HNI keywords, and the FII rule wins because it is checked first.
//!
//! This is a best-effort heuristic over brand names and legal-form words,
//! not a verified registry. Extending a rule set is a data change, not a
//! code change.

use core_types::InvestorClass;

/// One keyword rule set. A name that contains any of the keywords
/// (case-insensitively) is assigned the rule's class.
pub struct ClassificationRule {
    pub class: InvestorClass,
    pub keywords: &'static [&'static str],
}

/// The rule catalogue, in priority order: FII first, then DII, then HNI.
/// The first rule with a matching keyword wins; no rule means `Others`.
pub const CLASSIFICATION_RULES: &[ClassificationRule] = &[
    ClassificationRule {
        class: InvestorClass::Fii,
        keywords: &[
            "morgan",
            "goldman",
            "blackrock",
            "vanguard",
            "fidelity",
            "capital",
            "international",
            "global",
            "offshore",
        ],
    },
    ClassificationRule {
        class: InvestorClass::Dii,
        keywords: &[
            "mutual fund",
            "insurance",
            "lic",
            "sbi",
            "hdfc",
            "icici",
            "aditya birla",
            "reliance",
            "nippon",
        ],
    },
    ClassificationRule {
        class: InvestorClass::Hni,
        keywords: &[
            "family",
            "trust",
            "holdings",
            "investments",
            "enterprises",
        ],
    },
];

/// Classifies a counterparty name into one of the four investor classes.
///
/// Total over all strings: any input, including the empty string, yields
/// exactly one class. The same name always yields the same class.
pub fn classify(client_name: &str) -> InvestorClass {
    let name = client_name.to_lowercase();
    for rule in CLASSIFICATION_RULES {
        if rule.keywords.iter().any(|kw| name.contains(kw)) {
            return rule.class;
        }
    }
    InvestorClass::Others
}
