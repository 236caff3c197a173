//! Literal site content.
//!
//! DESIGN
//! ======
//! Copy lives in plain `&'static` tables, separate from the components
//! that render it, so content edits never touch view code. Records are
//! immutable and have no lifecycle beyond static initialization.


/// Small-print line above the name heading.
pub const KICKER: &str = "PORTFOLIO / 2025";

/// Name heading, split across two lines.
pub const FIRST_NAME: &str = "Gaurav";
pub const LAST_NAME: &str = "Gupta";

/// Contact email for the connect section.
pub const EMAIL: &str = "gaurav33ch@gmail.com";

/// Downloadable resume document.
pub const RESUME_URL: &str =
    "https://drive.google.com/file/d/1aRREttyH8O5JppBUMr9dCPVRmm2Ar7xB/view?usp=sharing";

/// Meta label next to the work section heading.
pub const WORK_PERIOD: &str = "2024 — 2025";

/// Meta label next to the projects section heading.
pub const PROJECTS_META: &str = "TOP 4";

/// Copyright line in the footer.
pub const COPYRIGHT: &str = "© 2025 Gaurav Gupta. All rights reserved.";

/// An external profile with a display handle.
pub struct SocialLink {
    pub name: &'static str,
    pub handle: &'static str,
    pub url: &'static str,
}

/// Profile cards shown in the intro section.
pub const INTRO_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "GitHub",
        handle: "@igauravgupta",
        url: "https://github.com/igauravgupta",
    },
    SocialLink {
        name: "LinkedIn",
        handle: "i-gauravgupta",
        url: "https://linkedin.com/in/i-gauravgupta",
    },
];

/// ELSEWHERE grid in the connect section.
pub const SOCIALS: &[SocialLink] = &[
    SocialLink {
        name: "GitHub",
        handle: "@gauravgupta",
        url: "https://github.com/igauravgupta",
    },
    SocialLink {
        name: "LinkedIn",
        handle: "i-gauravgupta",
        url: "https://linkedin.com/in/i-gauravgupta",
    },
    SocialLink {
        name: "Twitter",
        handle: "@igauravgupta_",
        url: "https://twitter.com/igauravgupta_",
    },
    SocialLink {
        name: "Instagram",
        handle: "@gaurav.chhirolya",
        url: "https://instagram.com/gaurav.chhirolya",
    },
];

/// The CURRENTLY block in the intro section.
pub struct Education {
    pub program: &'static str,
    pub school: &'static str,
    pub period: &'static str,
}

pub const EDUCATION: Education = Education {
    program: "Computer Science Undergrad",
    school: "@ KIET Group of Institutions, Delhi",
    period: "2022 — Present",
};

/// FOCUS tag chips in the intro section, one slice per row.
pub const FOCUS_ROWS: &[&[&str]] = &[
    &["React.js", "Node.js", "Next.js", "MongoDB"],
    &["SQL", "PostgreSQL", "DevOps", "GenAI"],
];

/// A titled group of skills in the proficiencies grid.
pub struct SkillGroup {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Frontend Technologies",
        skills: &[
            "HTML",
            "CSS",
            "JavaScript",
            "React",
            "Next.js",
            "Zustand",
            "Redux",
            "Tailwind CSS",
            "Framer Motion",
            "DOM",
        ],
    },
    SkillGroup {
        title: "Backend Technologies",
        skills: &[
            "Node.js",
            "Express.js",
            "REST API",
            "Zod/Joi Validation",
            "JWT/OAuth",
            "DB Modeling",
        ],
    },
    SkillGroup {
        title: "Languages & Tools",
        skills: &[
            "JavaScript",
            "C++",
            "Git",
            "GitHub",
            "Vercel",
            "VS Code",
            "Linux",
        ],
    },
    SkillGroup {
        title: "Databases",
        skills: &["SQL", "PostgreSQL", "Prisma ORM", "MongoDB", "Mongoose"],
    },
];

/// A work-history entry: internship or freelance engagement.
pub struct JobEntry {
    pub duration: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    /// Experience-letter document.
    pub link: &'static str,
}

pub const JOBS: &[JobEntry] = &[
    JobEntry {
        duration: "Aug 2025 - Present",
        role: "SDE Intern",
        company: "vemakers",
        description: "Working on a comprehensive Hospital Management System with an admin panel, \
                      doctor portal, and integrated patient management features.",
        tech: &["React.js", "Node.js", "Express.js", "NeonDB", "Prisma"],
        link: "https://drive.google.com/file/d/1dlKlr8u-1hBUKSI64Vs4gkNoytNC5fGx/view?usp=sharing",
    },
    JobEntry {
        duration: "Jul 2025 - Aug 2025",
        role: "Full Stack Intern",
        company: "Anany Pahal Foundation",
        description: "Designed and developed the Anany Pahal Foundation website with an integrated \
                      payment gateway for seamless online donations.",
        tech: &["React.js", "Node.js", "Framer Motion", "Express.js", "MongoDB"],
        link: "https://drive.google.com/file/d/1qFEfBhIOrGglB4dikjebKpThYegg2GRr/view",
    },
    JobEntry {
        duration: "Jan 2025 - Feb 2025",
        role: "Backend Developer Intern",
        company: "vemakers - Freelance",
        description: "Developed a scalable ADHD Tracker backend with secure JWT authentication, \
                      optimized MongoDB queries (40% faster), REST APIs, and seamless Flutter \
                      integration, improving efficiency and data security by 50%.",
        tech: &["Node.js", "Express.js", "MongoDB", "GoogleAuth", "JWT"],
        link: "https://drive.google.com/file/d/1POwMvY7T-k5bFSL1jfhYzmXHZICoK-ps/view?usp=sharing",
    },
    JobEntry {
        duration: "Sept 2024 - Nov 2024",
        role: "Full Stack Intern",
        company: "Sajal Tech Solutions Pvt. Ltd.",
        description: "Built a full-stack Q&A platform for car enthusiasts with a reputation \
                      system, 7+ optimized REST APIs, JWT authentication, and a responsive \
                      React-Tailwind frontend, reducing spam by 50% and boosting engagement by 40%.",
        tech: &["React", "Node.js", "Express.js", "MongoDB"],
        link: "https://drive.google.com/file/d/13gdVW2JhZ3agbOBXo7GfrgZjZvKdf7J6/view?usp=sharing",
    },
];

/// A featured-project card.
pub struct ProjectEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub github: &'static str,
    /// Live deployment, when one exists.
    pub live: Option<&'static str>,
}

pub const PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        title: "TinyURLz – Making Links Short & Simple",
        description: "Built a secure full-stack URL Shortener with a production-ready \
                      architecture, featuring rate limiting, input validation, and zero \
                      vulnerabilities.",
        tech: &[
            "React.js",
            "Node.js",
            "Express.js",
            "MongoDB",
            "Mongoose",
            "Google Auth",
            "AWS",
            "Docker",
        ],
        github: "https://github.com/igauravgupta/TinyURLz.git",
        live: Some("https://tinyurlzz.netlify.app"),
    },
    ProjectEntry {
        title: "MineGuard – AI-driven Regulatory Guidance Chatbot",
        description: "Worked in a 3-member team to build an AI-driven compliance and safety \
                      platform for the mining industry, featuring a LangChain-powered chatbot for \
                      real-time guidance on 100+ Indian mining laws and a secure incident \
                      reporting system with JWT authentication and file uploads via Multer and \
                      Cloudinary.",
        tech: &[
            "Node.js",
            "Express.js",
            "MongoDB",
            "JWT",
            "NLP",
            "LangChain",
            "LLM - Gemini",
            "AWS",
        ],
        github: "https://github.com/igauravgupta/MineGuard",
        live: None,
    },
    ProjectEntry {
        title: "Skillop - Full-Stack Job Application Platform",
        description: "Integrated 4+ features including job listings, user profiles, protected \
                      routes, and search, while streamlining state management with Redux Toolkit \
                      (30% complexity reduction) and securing file handling using Multer.",
        tech: &["React", "Node.js", "Express.js", "MongoDB", "Tailwind", "Docker"],
        github: "https://github.com/igauravgupta/JobQuest.git",
        live: Some("https://skill-op.netlify.app"),
    },
    ProjectEntry {
        title: "GoRide - On-demand Ride Management System",
        description: "Developed 2+ features including real-time ride tracking, driver-passenger \
                      management, and a booking system, while architecting 8+ RESTful APIs and \
                      integrating Socket.io for live ride updates.",
        tech: &[
            "React.js",
            "Node.js",
            "Socket.io",
            "Express.js",
            "MongoDB",
            "Google Maps API",
        ],
        github: "https://github.com/igauravgupta/taxi-management-app-backend",
        live: Some("https://goride-1.netlify.app/"),
    },
];
