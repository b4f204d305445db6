//! Static portfolio content.
//!
//! Everything here is `'static` reference data; the resolver only reads it.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectRecord {
    pub name: &'static str,
    pub description: &'static str,
    pub href: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectCategory {
    Current,
    Past,
    ForFun,
}

pub fn projects(category: ProjectCategory) -> &'static [ProjectRecord] {
    match category {
        ProjectCategory::Current => CURRENT_PROJECTS,
        ProjectCategory::Past => PAST_PROJECTS,
        ProjectCategory::ForFun => FOR_FUN_PROJECTS,
    }
}

// The first three entries are what the welcome transcript shows.
const CURRENT_PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        name: "Applied AI/ML Pilot",
        description: "Development and delivery of Applied AI/ML curriculum for Jordanian CS and EE university grads in partnership with the Crown Prince Foundation’s Future Skills Fund and Istidama Consulting.",
        href: None,
    },
    ProjectRecord {
        name: "Rooftop Platform",
        description: "Building a custom AI enabled platform for Rooftop Global, a women’s emerging tech and investment community.",
        href: None,
    },
    ProjectRecord {
        name: "AI Journal",
        description: "Personal project documenting my learning journey and experiments with new releases.",
        href: None,
    },
    ProjectRecord {
        name: "AI Leads",
        description: "Outbound AI agent that researches prospects, enriches context, and drafts channel-specific outreach.",
        href: None,
    },
    ProjectRecord {
        name: "Guzakuza AI Training",
        description: "Designing AI training modules for women-led agri-business founders through Guzakuza’s AISP program.",
        href: None,
    },
    ProjectRecord {
        name: "Section Advanced Prompt Training",
        description: "Leading Section School cohorts on advanced prompt design, agent workflows, and evaluation systems.",
        href: None,
    },
];

const PAST_PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        name: "Kimchi Token",
        description: "Designed and built kimchitoken.com and Telegram community integrations for KTZ blockchain token launch.",
        href: Some("https://www.kimchitoken.com/"),
    },
    ProjectRecord {
        name: "Guzakuza AI Optimization",
        description: "Designed and delivered AI fundamentals + workflow design modules for women agri-business founders in Africa in partnership with Guzakuza's Ignite accelerator.",
        href: None,
    },
    ProjectRecord {
        name: "Section Advanced Prompt Engineering",
        description: "Developed enterprise prompt engineering curriculum and live cohort facilitation for Section AI School.",
        href: None,
    },
    ProjectRecord {
        name: "PR Council AI Readiness",
        description: "Led AI readiness training for PR Council agencies covering automation, ethics, and client enablement.",
        href: None,
    },
    ProjectRecord {
        name: "AB InBev Ops",
        description: "Consulted on AI enablement across the Americas and Europe for AB InBev Distribution Managers.",
        href: None,
    },
];

const FOR_FUN_PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        name: "Mountain House Meal Planner",
        description: "Household agent that parses grocery receipts, checks Seattle weather, and generates adaptive dinner plans.",
        href: None,
    },
    ProjectRecord {
        name: "Fitness Trainer Agent",
        description: "Personal agent generating workout plans, nudges, and more from Apple Fitness and other iOS app data with daily check-ins.",
        href: None,
    },
    ProjectRecord {
        name: "Donut Dashboard",
        description: "Gamification of open source dev community contributions.",
        href: None,
    },
];

pub const OWNER_NAME: &str = "Lana Zumbrunn";

pub const INTRODUCTION: &str = "an AI engineer and technical leader shipping agent systems, workflow optimizations, and technical upskilling curriculum.";

pub const CONTACT_EMAIL: &str = "lana@levelupeconomy.com";

/// `(label, href)` pairs; labels are shown as authored.
pub const SOCIAL_PROFILES: &[(&str, &str)] = &[
    ("x.com/lan_azk", "https://x.com/lan_azk"),
    (
        "linkedin.com/in/lanazumbrunn",
        "https://linkedin.com/in/lanazumbrunn",
    ),
];

/// `(institution, credential)` pairs.
pub const EDUCATION: &[(&str, &str)] = &[
    (
        "University of Nebraska",
        "Bachelor of Arts in Communication Studies and Poli Sci",
    ),
    (
        "Code Fellows",
        "Certificate of Advanced Software Development in Python",
    ),
    (
        "Business Retention & Expansion International",
        "Certified Consultant (BREP)",
    ),
    (
        "Cloud Security Alliance",
        "Trusted AI Safety Expert (in progress)",
    ),
];

pub const BACKGROUND: &[&str] = &[
    "AI engineer + technical leader building agent platforms, automation workflows, and upskilling programs.",
    "Former strategy + ops leader (public-private partnerships, venture, community programming).",
    "Organizer/member: AI Tinkerers, PuPPy (Seattle Python), TechWell AI Con.",
];

/// A heading followed by its indented entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub heading: &'static str,
    pub entries: &'static [&'static str],
}

pub const SPEAKING: &[Section] = &[
    Section {
        heading: "Major conferences:",
        entries: &["SXSW, Rise of the Rest, InBIA, Global Accelerator Network, Global Entrepreneurship Congress, VentureWell"],
    },
    Section {
        heading: "Technical talks and demos:",
        entries: &["AI Tinkerers, PuPPy (Puget Sound Programming Python), Fueling the Future of Female-Founded Innovation, Seattle Tech Week, AI2"],
    },
];

pub const COMMUNITY: &[Section] = &[
    Section {
        heading: "Organizing:",
        entries: &[
            "AI Tinkerers Seattle: hackathons, demo nights, and builder meetups",
            "TechWell AI Con: program and community partnerships",
        ],
    },
    Section {
        heading: "Member:",
        entries: &[
            "PuPPy (Puget Sound Programming Python)",
            "Rooftop Global: women’s emerging tech and investment community",
        ],
    },
];

/// `(award, write-up)` pairs.
pub const HACKATHONS: &[(&str, &str)] = &[
    (
        "AI Tinkerers Agents Hackathon, 2nd place",
        "Built a multi-agent system for DevRel productivity including GitHub changelog to content, community sentiment analysis, and daily recommended actions, receiving a top rank AI Tinkerers Seattle hackathon in 2025; Invited to pitch at AI2.",
    ),
    (
        "Seattle Hackathon for Public Good, Most Impact award",
        "Built an agentic system for early career job-seekers to get connected with trade professions and increase their relevant experience.",
    ),
];

pub const FOR_FUN_HEADING: &str = "Experiments and side projects:";

/// Featured experiment shown above the for-fun project list.
pub const FOR_FUN_FEATURED: (&str, &str) = (
    "Oh, Kale No!: A mental health check-in with AI chat: ohkaleno.xyz",
    "https://ohkaleno.xyz/",
);
