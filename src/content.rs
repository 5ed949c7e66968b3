//! Hard-coded copy for the experience timeline and project showcase.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceItem {
    pub id: &'static str,
    pub title: &'static str,
    pub organization: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub highlights: &'static [&'static str],
    pub technologies: Option<&'static [&'static str]>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub technologies: &'static [&'static str],
    pub live_url: &'static str,
}

pub static EXPERIENCES: &[ExperienceItem] = &[
    ExperienceItem {
        id: "education",
        title: "SoftUni JavaScript Roadmap",
        organization: "Software University",
        period: "2022 - 2023",
        description: "Studied computer science fundamentals, programming languages, and software development methodologies.",
        highlights: &[
            "Learned the basics of JavaScript",
            "Built my first websites using HTML and CSS",
            "Implemented javascript logic to make my websites interactive",
            "Learned React in depth, so I can build complex web applications faster",
            "Studied Node.js and MongoDB, so I can build backend services, authentication, and more",
            "Used Git and GitHub to manage my code and collaborate with other developers",
        ],
        technologies: Some(&["JavaScript", "HTML", "CSS", "React", "Node.js", "Git", "GitHub"]),
    },
    ExperienceItem {
        id: "freelancing",
        title: "Freelance Web Developer",
        organization: "Independent",
        period: "2023 - Present",
        description: "Provided web development services to various clients, building custom websites and web applications.",
        highlights: &[
            "Built 10+ custom websites and web applications",
            "Maintained and updated existing websites and web applications",
            "Developed e-commerce platforms and solutions",
            "Met and exceeded client expectations on every project",
            "Created beautiful and responsive designs",
        ],
        technologies: Some(&[
            "React",
            "Next.js",
            "JavaScript",
            "TypeScript",
            "Node.js",
            "Express",
            "Tailwind CSS",
            "Git",
            "GitHub",
            "MongoDB",
            "OpenAI api",
            "Stripe",
            "Mailgun",
            "Nodemailer",
        ]),
    },
    ExperienceItem {
        id: "current-job",
        title: "Fullstack Developer",
        organization: "Vention",
        period: "2024 - Present",
        description: "Worked in a production environment alongside other developers, designers, and QA engineers.",
        highlights: &[
            "Worked on a variety of projects with a variety of technologies",
            "Stayed up to date with the latest technologies and trends, by taking internal exams and courses.",
            "Thrived in a fast-paced environment",
            "Worked in a team of over 10 developers",
            "Successfully replicated existing designs and requested features",
        ],
        technologies: Some(&[
            "React",
            "TypeScript",
            "Next.js",
            "React Query",
            "Redux",
            "Zod",
            "Formik",
            "Docker",
            "MongoDB",
        ]),
    },
];

pub static PROJECTS: &[Project] = &[
    Project {
        id: "bite-code",
        title: "Bite Code",
        category: "SaaS Platform",
        description: "Multi-language menu management platform that allows restaurants to create digital menus with automatic translation, calorie calculation, and QR code generation.",
        features: &[
            "Auto-translation in 6 languages",
            "Calorie calculation system",
            "QR code generation",
            "Language detection & switcher",
            "Real-time menu management",
        ],
        technologies: &["React", "Node.js", "TypeScript", "MongoDB", "Translation API"],
        live_url: "https://bite-code.com",
    },
    Project {
        id: "alcona-solutions",
        title: "Alcona Solutions",
        category: "E-commerce CMS",
        description: "Custom content management system and e-commerce platform for a construction materials company specializing in fences, decking, and portals.",
        features: &[
            "Complete admin dashboard",
            "Product & category management",
            "Blog & content system",
            "Discount management",
            "Analytics & statistics",
            "Banner management",
        ],
        technologies: &["Next.js", "React", "TypeScript", "PostgreSQL", "Stripe"],
        live_url: "https://alcona-solutions.com",
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let ids = EXPERIENCES.iter().map(|e| e.id).collect::<HashSet<_>>();
        assert_eq!(ids.len(), EXPERIENCES.len());

        let ids = PROJECTS.iter().map(|p| p.id).collect::<HashSet<_>>();
        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn test_project_links_are_absolute() {
        for project in PROJECTS {
            let url = url::Url::parse(project.live_url).expect("live url should parse");
            assert_eq!(url.scheme(), "https", "{}", project.id);
        }
    }

    #[test]
    fn test_no_empty_entries() {
        for exp in EXPERIENCES {
            assert!(!exp.highlights.is_empty(), "{}", exp.id);
            assert!(exp.highlights.iter().all(|h| !h.trim().is_empty()));
        }
        for project in PROJECTS {
            assert!(!project.features.is_empty(), "{}", project.id);
            assert!(!project.technologies.is_empty(), "{}", project.id);
        }
    }
}
