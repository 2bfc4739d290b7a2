//! Initial leads loaded into a fresh stream, newest first.
//!
//! Hand-curated records: their statuses predate the factory's class/status
//! pairing (a hot lead may show an opened email), but every one satisfies the
//! record-level invariants checked by [`Lead::invariant_violations`].

use crate::lead::{Lead, LeadId, LeadStatus, PriorityClass, ResearchSignal, SignalKind};

fn sig(kind: SignalKind, title: &str, detail: &str, age: &str) -> ResearchSignal {
    ResearchSignal {
        kind,
        title: title.to_string(),
        detail: detail.to_string(),
        age: age.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn lead(
    id: &str,
    name: &str,
    company: &str,
    position: &str,
    class: PriorityClass,
    status: LeadStatus,
    value: u64,
    signals: Vec<ResearchSignal>,
) -> Lead {
    Lead {
        id: LeadId::new(id),
        name: name.to_string(),
        company: company.to_string(),
        position: position.to_string(),
        priority_class: class,
        status,
        value: Some(value),
        last_contacted: None,
        signals,
    }
}

/// The nine dashboard leads (5 hot, 4 warm).
pub fn seed_leads() -> Vec<Lead> {
    use PriorityClass::{Hot, Warm};
    use SignalKind::*;

    let mut emily = lead(
        "6",
        "Emily Johanson",
        "Apex Industries",
        "COO",
        Warm,
        LeadStatus::BookedDemo { time: "3h ago".into() },
        7_000,
        vec![
            sig(
                Hire,
                "Brought on Kubernetes specialist",
                "Apex Industries is investing in container orchestration expertise, signaling a move toward cloud-native applications.",
                "12d ago",
            ),
            sig(
                Funding,
                "Secured $8M seed funding",
                "This new capital will accelerate their product development and market expansion, creating urgency for new technology solutions.",
                "20d ago",
            ),
        ],
    );
    emily.last_contacted = Some("2 months ago".to_string());

    vec![
        lead(
            "1",
            "Henry O'Larry",
            "Acme Corp",
            "VP Sales",
            Hot,
            LeadStatus::ViewedDemo { time: "2h ago".into() },
            10_000,
            vec![
                sig(
                    Hire,
                    "Hired Azure Cosmos DB specialist",
                    "Acme Corp recently strengthened their technical team with this strategic hire, indicating a shift toward cloud-native databases.",
                    "5d ago",
                ),
                sig(
                    Social,
                    "LinkedIn post about digital transformation",
                    "Henry shared thoughts on their digital transformation journey, highlighting challenges with legacy systems.",
                    "2d ago",
                ),
            ],
        ),
        lead(
            "2",
            "Joanna Stuart",
            "TechGrowth",
            "CTO",
            Hot,
            LeadStatus::OpenedEmail { time: "1d ago".into() },
            12_000,
            vec![
                sig(
                    Funding,
                    "Closed $25M funding round",
                    "This new capital will accelerate their product development and market expansion, creating urgency for new technology solutions.",
                    "7d ago",
                ),
                sig(
                    Tech,
                    "Implementing microservices architecture",
                    "This technology shift presents an opportunity for our solution to add value in their new distributed environment.",
                    "14d ago",
                ),
            ],
        ),
        lead(
            "3",
            "Francois Mehmud",
            "Global Solutions",
            "Director",
            Hot,
            LeadStatus::DownloadedWhitepaper,
            9_000,
            vec![sig(
                Executive,
                "New VP of Engineering",
                "This leadership change signals their focus on technical innovation and growth, with the new VP coming from a company that uses our competitor.",
                "10d ago",
            )],
        ),
        lead(
            "4",
            "Anderson Yang",
            "Innovate Inc",
            "CMO",
            Hot,
            LeadStatus::FormSubmission { time: "3d ago".into() },
            12_000,
            vec![
                sig(
                    News,
                    "Announced new product launch",
                    "Their new product will require robust data processing capabilities that our platform excels at providing.",
                    "3d ago",
                ),
                sig(
                    Social,
                    "CEO shared article on cloud migration",
                    "Their CEO is publicly discussing cloud migration challenges, which our solution directly addresses.",
                    "1d ago",
                ),
            ],
        ),
        lead(
            "5",
            "Mike Carr",
            "Quantum Systems",
            "CEO",
            Warm,
            LeadStatus::ViewedDemo { time: "1d ago".into() },
            7_000,
            vec![sig(
                Tech,
                "Evaluating new CRM solutions",
                "This technology evaluation presents an opportunity for our integration capabilities to add significant value.",
                "8d ago",
            )],
        ),
        emily,
        lead(
            "7",
            "Victor Heid",
            "Stellar Tech",
            "Sales Manager",
            Warm,
            LeadStatus::OpenedEmail { time: "5h ago".into() },
            7_000,
            vec![sig(
                Executive,
                "Appointed Director of AI",
                "This new leadership role indicates their strategic investment in AI capabilities, which our platform can enhance.",
                "15d ago",
            )],
        ),
        lead(
            "8",
            "Ali Khaled",
            "Horizon Software",
            "Product Manager",
            Warm,
            LeadStatus::DownloadedWhitepaper,
            7_000,
            vec![sig(
                News,
                "Partnered with major tech vendor",
                "Their new partnership creates an integration opportunity for our platform to provide additional value.",
                "4d ago",
            )],
        ),
        lead(
            "9",
            "Jenny Smith",
            "Pinnacle Solutions",
            "Marketing Director",
            Hot,
            LeadStatus::BookedDemo { time: "1h ago".into() },
            15_000,
            vec![
                sig(
                    Social,
                    "Posted about AI implementation success",
                    "Jenny shared their successful AI implementation, highlighting areas where our solution could provide additional capabilities.",
                    "2d ago",
                ),
                sig(
                    Tech,
                    "Investing in data analytics platform",
                    "This technology investment aligns perfectly with our platform's analytics capabilities and integration features.",
                    "9d ago",
                ),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_is_consistent_and_unique() {
        let leads = seed_leads();
        assert_eq!(leads.len(), 9);
        let ids: HashSet<_> = leads.iter().map(|l| l.id.clone()).collect();
        assert_eq!(ids.len(), 9);
        for l in &leads {
            assert!(l.is_consistent(), "{}: {:?}", l.id, l.invariant_violations());
        }
        let hot = leads
            .iter()
            .filter(|l| l.priority_class == PriorityClass::Hot)
            .count();
        assert_eq!(hot, 5);
        assert_eq!(leads[0].id.as_str(), "1");
    }
}
