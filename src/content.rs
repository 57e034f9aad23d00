//! Hardcoded portfolio content.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Web,
    Ai,
    Robotics,
}

impl Category {
    pub fn key(self) -> &'static str {
        match self {
            Category::Web => "web",
            Category::Ai => "ai",
            Category::Robotics => "robotics",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("unknown project category: {0}")]
    UnknownCategory(String),
}

/// Selection in the projects section. Defaults to showing everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ProjectFilter {
    #[default]
    All,
    Only(Category),
}

impl ProjectFilter {
    /// In the order the filter buttons are shown.
    pub const ALL: [ProjectFilter; 4] = [
        ProjectFilter::All,
        ProjectFilter::Only(Category::Web),
        ProjectFilter::Only(Category::Ai),
        ProjectFilter::Only(Category::Robotics),
    ];

    pub fn key(self) -> &'static str {
        match self {
            ProjectFilter::All => "all",
            ProjectFilter::Only(category) => category.key(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProjectFilter::All => "All Projects",
            ProjectFilter::Only(Category::Web) => "Web Development",
            ProjectFilter::Only(Category::Ai) => "AI & Machine Learning",
            ProjectFilter::Only(Category::Robotics) => "Robotics",
        }
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Only(category) => project.category == category,
        }
    }
}

impl FromStr for ProjectFilter {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.key() == s)
            .ok_or_else(|| FilterError::UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for ProjectFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub link: &'static str,
}

/// Keeps the projects matching `filter`, in their original order.
pub fn filter_projects(projects: &[Project], filter: ProjectFilter) -> Vec<&Project> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}

pub static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Neural Interface Dashboard",
        category: Category::Ai,
        description: "A real-time dashboard for monitoring and controlling neural network training processes with 3D visualization.",
        technologies: &["React", "Three.js", "TensorFlow", "WebGL"],
        link: "#",
    },
    Project {
        id: 2,
        title: "Automated Drone Control System",
        category: Category::Robotics,
        description: "Web-based control system for autonomous drone fleets with live telemetry and path planning.",
        technologies: &["Vue.js", "Node.js", "WebRTC", "ROS"],
        link: "#",
    },
    Project {
        id: 3,
        title: "Mecha Design Studio",
        category: Category::Web,
        description: "Interactive 3D configurator for custom mecha robots with real-time rendering and AR preview.",
        technologies: &["Next.js", "Blender", "WebXR", "Tailwind CSS"],
        link: "#",
    },
    Project {
        id: 4,
        title: "AI-Powered Visual Assistant",
        category: Category::Ai,
        description: "Computer vision application that provides real-time object recognition and contextual information.",
        technologies: &["Python", "OpenCV", "PyTorch", "FastAPI"],
        link: "#",
    },
    Project {
        id: 5,
        title: "Robotic Arm Simulator",
        category: Category::Robotics,
        description: "Browser-based simulation environment for programming and testing robotic arm movements.",
        technologies: &["React", "Three.js", "Physics.js", "TypeScript"],
        link: "#",
    },
    Project {
        id: 6,
        title: "Cyber Security Dashboard",
        category: Category::Web,
        description: "Real-time monitoring dashboard for network security with threat detection and analytics.",
        technologies: &["Angular", "D3.js", "WebSocket", "MongoDB"],
        link: "#",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Percent, 0 to 100.
    pub level: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [Skill],
}

pub static SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        name: "Frontend",
        skills: &[
            Skill { name: "React", level: 90 },
            Skill { name: "TypeScript", level: 85 },
            Skill { name: "Tailwind CSS", level: 80 },
            Skill { name: "Next.js", level: 75 },
        ],
    },
    SkillCategory {
        name: "Backend",
        skills: &[
            Skill { name: "Node.js", level: 80 },
            Skill { name: "Python", level: 85 },
            Skill { name: "MongoDB", level: 70 },
            Skill { name: "PostgreSQL", level: 75 },
        ],
    },
    SkillCategory {
        name: "AI & Robotics",
        skills: &[
            Skill { name: "TensorFlow", level: 70 },
            Skill { name: "PyTorch", level: 65 },
            Skill { name: "ROS", level: 60 },
            Skill { name: "Computer Vision", level: 75 },
        ],
    },
];

pub static EXPERTISE: &[&str] = &[
    "UI/UX Design",
    "3D Modeling",
    "IoT Development",
    "Machine Learning",
    "Cloud Computing",
    "DevOps",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

pub static STATS: &[Stat] = &[
    Stat { label: "Years Experience", value: "3+" },
    Stat { label: "Projects Completed", value: "50+" },
    Stat { label: "Technologies", value: "15+" },
    Stat { label: "AI Models", value: "10+" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

pub static EDUCATION: &[Education] = &[
    Education {
        degree: "B.S. Computer Science & Robotics",
        institution: "Neo Tokyo Institute of Technology",
        period: "2018 - 2022",
        description: "Specialized in AI, machine learning, and robotic systems design. Graduated with honors.",
    },
    Education {
        degree: "Advanced Web Development Certification",
        institution: "Cyber Academy",
        period: "2022 - 2023",
        description: "Focused on modern frameworks, responsive design, and performance optimization.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub position: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

pub static EXPERIENCE: &[Experience] = &[
    Experience {
        position: "Senior Frontend Engineer",
        company: "OmniCorp Industries",
        period: "2023 - Present",
        description: "Leading development of next-generation UI systems for robotic control interfaces.",
    },
    Experience {
        position: "Full Stack Developer",
        company: "NexGen Robotics",
        period: "2022 - 2023",
        description: "Developed web applications for monitoring and controlling robotic systems in real-time.",
    },
    Experience {
        position: "AI Research Intern",
        company: "Aether Systems",
        period: "2021 - 2022",
        description: "Contributed to computer vision projects and neural network implementations.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactMethod {
    pub icon: &'static str,
    pub title: &'static str,
    pub value: &'static str,
    pub link: &'static str,
}

pub static CONTACT_METHODS: &[ContactMethod] = &[
    ContactMethod {
        icon: "📧",
        title: "Email",
        value: "mechadev@example.com",
        link: "mailto:mechadev@example.com",
    },
    ContactMethod {
        icon: "📱",
        title: "Phone",
        value: "+1 (555) 123-ROBO",
        link: "tel:+15551237626",
    },
    ContactMethod {
        icon: "📍",
        title: "Location",
        value: "Neo Tokyo, Digital District",
        link: "#",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub icon: &'static str,
    pub url: &'static str,
    /// Tailwind hover color class.
    pub hover: &'static str,
}

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "GitHub",
        icon: "🤖",
        url: "#",
        hover: "hover:text-mecha-accent",
    },
    SocialLink {
        name: "LinkedIn",
        icon: "⚙️",
        url: "#",
        hover: "hover:text-mecha-glow",
    },
    SocialLink {
        name: "Twitter",
        icon: "🔧",
        url: "#",
        hover: "hover:text-mecha-accent",
    },
    SocialLink {
        name: "Instagram",
        icon: "📡",
        url: "#",
        hover: "hover:text-mecha-glow",
    },
];

/// Anchor targets of the navigation bar, in page order.
pub static SECTIONS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("about", "About"),
    ("skills", "Skills"),
    ("education", "Experience"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_ai() {
        let filtered = filter_projects(PROJECTS, "ai".parse().unwrap());
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|p| p.category == Category::Ai));
        let expected = PROJECTS
            .iter()
            .filter(|p| p.category == Category::Ai)
            .collect::<Vec<_>>();
        assert_eq!(filtered, expected);
    }

    #[test]
    fn test_filter_all_preserves_list() {
        let filtered = filter_projects(PROJECTS, ProjectFilter::default());
        assert_eq!(filtered.len(), PROJECTS.len());
        let ids = filtered.iter().map(|p| p.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_filters_partition_projects() {
        let total = ProjectFilter::ALL
            .into_iter()
            .filter(|f| *f != ProjectFilter::All)
            .map(|f| filter_projects(PROJECTS, f).len())
            .sum::<usize>();
        assert_eq!(total, PROJECTS.len());
    }

    #[test]
    fn test_filter_keys_round_trip() {
        for filter in ProjectFilter::ALL {
            assert_eq!(filter.key().parse::<ProjectFilter>(), Ok(filter));
        }
        assert_eq!(
            "AI".parse::<ProjectFilter>(),
            Err(FilterError::UnknownCategory("AI".to_string()))
        );
    }

    #[test]
    fn test_skill_levels_are_percentages() {
        assert_eq!(SKILL_CATEGORIES.len(), 3);
        for category in SKILL_CATEGORIES {
            assert_eq!(category.skills.len(), 4);
            assert!(category.skills.iter().all(|s| s.level <= 100));
        }
    }
}
