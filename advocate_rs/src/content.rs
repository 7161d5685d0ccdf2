//! Static page copy.

pub const BRAND: &str = "ROBERT A. SANCHEZ";
pub const OWNER: &str = "Robert A. Sanchez";
pub const TAGLINE: &str = "Your Certified Guide To Advocating Health Equity & Social Justice";

pub const HERO_EYEBROW: &str = "Your Certified Guide To";
pub const HERO_HEADLINE: [&str; 2] = ["Advocating Health Equity", "& Social Justice"];
pub const HERO_CTA: &str = "Start Your Journey";
pub const WORK_WITH_ME: &str = "Work with me";

pub const SERVICES_HEADING: &str = "Our Services";
pub const SERVICES_INTRO: &str = "Empowering individuals and communities through comprehensive healthcare advocacy and education.";

pub const RESUME_HEADING: &str = "Professional Experience";
pub const RESUME_CTA: &str = "Download Full Resume";
pub const PORTRAIT_ALT: &str = "Robert Sanchez - Health Equity Advocate";

pub const ADVOCACY_HEADING: &str = "Rehabilitation Through the Arts (RTA)";
pub const ADVOCACY_LEAD: &str = "My work with RTA and the inspiration behind the movie ";
pub const ADVOCACY_FILM: &str = "Sing Sing";
pub const ADVOCACY_TAIL: &str =
    " underscores my commitment to transformative justice through creativity.";

pub const CONTACT_HEADING: &str = "Let's Connect";
pub const CONTACT_INTRO: &str = "Interested in collaboration or advocacy? Reach out today.";
pub const CONTACT_CTA: &str = "Contact Me";

pub const LEARN_MORE: &str = "Learn More";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Patient Advocacy",
        description: "Guiding individuals through complex healthcare processes with personalized care and expert support.",
        icon: "🏥",
    },
    Service {
        title: "Community Workshops",
        description: "Interactive sessions designed to empower communities on health equity, policy, and advocacy.",
        icon: "👥",
    },
    Service {
        title: "Public Speaking",
        description: "Engaging talks and keynotes focused on personal experiences, resilience, and transformative justice.",
        icon: "🎤",
    },
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
}

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        title: "Senior Clinical Interviewer & Patient Advocate",
        company: "Albert Einstein Medical College",
        period: "2020 - Present",
    },
    Experience {
        title: "Community Board Member",
        company: "Icahn School of Medicine at Mount Sinai",
        period: "2018 - 2020",
    },
    Experience {
        title: "Project Lead, Health Equity",
        company: "WE at The World Health Equity",
        period: "2016 - 2018",
    },
];

/// Footer copyright notice for the given calendar year.
pub fn copyright_line(year: u32) -> String {
    format!("© {year} {OWNER}. All rights reserved.")
}
