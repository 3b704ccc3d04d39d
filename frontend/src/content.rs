//! Static copy for the portfolio page.

pub const HERO_TITLES: &[&str] = &[
    "Full Stack Developer",
    "React Developer",
    "TypeScript Expert",
    "Python Enthusiast",
    "Web Developer",
    "Software Engineer",
];

pub struct Stat {
    pub number: u32,
    pub label: &'static str,
    pub suffix: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { number: 75, label: "Projects Completed", suffix: "+" },
    Stat { number: 4500, label: "Problems Solved", suffix: "+" },
    Stat { number: 5, label: "Years Learning", suffix: "+" },
];

pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight { icon: "🎯", title: "Problem Solving", desc: "Expert in algorithmic thinking" },
    Highlight { icon: "⚡", title: "Fast Learner", desc: "Quick to adapt new technologies" },
    Highlight { icon: "🚀", title: "Performance", desc: "Optimized and scalable solutions" },
    Highlight { icon: "🤝", title: "Collaboration", desc: "Great team player and communicator" },
];

#[derive(Clone, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub github_url: &'static str,
    pub live_url: Option<&'static str>,
}

/// Badges shown on a card before collapsing the rest into "+N".
pub const MAX_BADGES: usize = 3;

impl Project {
    /// Where the card's main button goes: the live site if there is one.
    pub fn primary_link(&self) -> &'static str {
        self.live_url.unwrap_or(self.github_url)
    }

    /// Extra GitHub button, only when the main button points at a live site.
    pub fn secondary_link(&self) -> Option<&'static str> {
        self.live_url.map(|_| self.github_url)
    }

    pub fn badges(&self) -> (&'static [&'static str], usize) {
        let shown = self.technologies.len().min(MAX_BADGES);
        (&self.technologies[..shown], self.technologies.len() - shown)
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "ParthaEducare",
        description: "A comprehensive medical education consultancy website based in Ranaghat, West Bengal, India. The platform connects students with medical and pharmacy educational opportunities across India, offering expert career guidance and admission assistance with modern web technologies.",
        image: "Projects/parthaeducare.png",
        technologies: &["HTML5", "CSS3", "JavaScript (ES6+)", "Responsive Design"],
        github_url: "https://github.com/amit59684/ParthaEducare",
        live_url: Some("https://parthaeducare.com"),
    },
    Project {
        title: "Admission Junction",
        description: "A comprehensive platform for college admissions and educational institution management built with the MERN stack. Features college listings, application management, user profiles, admin dashboard, and responsive design for seamless user experience.",
        image: "Projects/admissionjunction.png",
        technologies: &["MongoDB", "Express.js", "React", "Node.js"],
        github_url: "https://github.com/amit59684/AdmissionJunction",
        live_url: Some("https://admissionjunction.com"),
    },
    Project {
        title: "Sudoku Solver",
        description: "Created an intelligent Sudoku puzzle solver using backtracking algorithm that efficiently solves puzzles of varying difficulty levels.",
        image: "Projects/sudoku.png",
        technologies: &["Python", "Backtracking", "Logic"],
        github_url: "https://github.com/amit59684/sudoku_solver",
        live_url: None,
    },
    Project {
        title: "Terminal Based Maze Solver",
        description: "Developed a sophisticated terminal-based application that solves complex mazes using various pathfinding algorithms including BFS, DFS, and A*.",
        image: "Projects/maze.png",
        technologies: &["Python", "Algorithms", "Data Structures"],
        github_url: "https://github.com/amit59684/Terminal-Based-Maze-Solver",
        live_url: None,
    },
];

pub const GITHUB_PROFILE: &str = "https://github.com/amit59684";

pub struct Skill {
    pub name: &'static str,
    pub level: u32,
    pub icon: &'static str,
}

pub const SKILLS: &[Skill] = &[
    Skill { name: "Python", level: 90, icon: "TS/python.png" },
    Skill { name: "JavaScript", level: 95, icon: "TS/java-script.png" },
    Skill { name: "TypeScript", level: 85, icon: "TS/typescript.png" },
    Skill { name: "Java", level: 80, icon: "TS/java.png" },
    Skill { name: "Data Structures & Algorithms", level: 85, icon: "TS/algorithm.png" },
    Skill { name: "Django", level: 85, icon: "TS/django (1).png" },
    Skill { name: "MySQL", level: 80, icon: "TS/mysql.png" },
    Skill { name: "MongoDB", level: 75, icon: "TS/database-storage.png" },
    Skill { name: "HTML", level: 95, icon: "TS/programming.png" },
    Skill { name: "CSS", level: 88, icon: "TS/coding.png" },
    Skill { name: "Django REST", level: 82, icon: "TS/django.png" },
    Skill { name: "AIML", level: 75, icon: "TS/ai.png" },
];

pub struct SoftSkill {
    pub title: &'static str,
    pub description: &'static str,
}

pub const SOFT_SKILLS: &[SoftSkill] = &[
    SoftSkill { title: "Problem Solving", description: "Expert in breaking down complex problems into manageable solutions" },
    SoftSkill { title: "Teamwork", description: "Collaborative approach to achieving project goals" },
    SoftSkill { title: "Communication", description: "Clear and effective communication across all levels" },
    SoftSkill { title: "Adaptability", description: "Quick to adapt to new technologies and methodologies" },
    SoftSkill { title: "Creativity", description: "Innovative thinking to create unique solutions" },
    SoftSkill { title: "Time Management", description: "Efficient prioritization and deadline management" },
    SoftSkill { title: "Leadership", description: "Guiding teams toward common goals with confidence and vision" },
    SoftSkill { title: "Critical Thinking", description: "Analytical approach to evaluating information and making informed decisions" },
];

#[derive(Clone, PartialEq)]
pub struct SocialLink {
    pub href: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
    /// CSS background for the link pill.
    pub background: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        href: "https://www.instagram.com/amitadhikary02/",
        icon: "Contacts/instagram.png",
        label: "Instagram",
        background: "linear-gradient(90deg, #a855f7, #ec4899, #ef4444)",
    },
    SocialLink {
        href: "https://www.facebook.com/amitadhikary02",
        icon: "Contacts/facebook.png",
        label: "Facebook",
        background: "linear-gradient(90deg, #2563eb, #3b82f6)",
    },
    SocialLink {
        href: "https://wa.me/+918101029684",
        icon: "Contacts/whatsapp.png",
        label: "WhatsApp",
        background: "linear-gradient(90deg, #22c55e, #4ade80)",
    },
    SocialLink {
        href: "https://www.linkedin.com/in/amitadhikary02/",
        icon: "Contacts/linkedin.png",
        label: "LinkedIn",
        background: "linear-gradient(90deg, #2563eb, #3b82f6)",
    },
    SocialLink {
        href: "mailto:amitadhikary59684@gmail.com",
        icon: "Contacts/email.png",
        label: "Email Me",
        background: "linear-gradient(90deg, #dc2626, #ef4444)",
    },
    SocialLink {
        href: "https://github.com/amit59684",
        icon: "Contacts/github.png",
        label: "GitHub",
        background: "linear-gradient(90deg, #1f2937, #374151)",
    },
    SocialLink {
        href: "https://leetcode.com/u/amitadhikary/",
        icon: "Contacts/leetcode.png",
        label: "LeetCode",
        background: "linear-gradient(90deg, #ea580c, #f97316)",
    },
    SocialLink {
        href: "https://www.hackerrank.com/profile/amit059684",
        icon: "Contacts/hackerrank.png",
        label: "HackerRank",
        background: "linear-gradient(90deg, #16a34a, #22c55e)",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_live_project_links() {
        let live = &PROJECTS[0];
        assert_eq!(live.primary_link(), "https://parthaeducare.com");
        assert_eq!(live.secondary_link(), Some("https://github.com/amit59684/ParthaEducare"));
    }

    #[test]
    fn test_repo_only_project_links() {
        let repo_only = &PROJECTS[2];
        assert_eq!(repo_only.primary_link(), "https://github.com/amit59684/sudoku_solver");
        assert_eq!(repo_only.secondary_link(), None);
    }

    #[test]
    fn test_badges_collapse_after_three() {
        let (shown, rest) = PROJECTS[0].badges();
        assert_eq!(shown, &["HTML5", "CSS3", "JavaScript (ES6+)"]);
        assert_eq!(rest, 1);

        let (shown, rest) = PROJECTS[2].badges();
        assert_eq!(shown.len(), 3);
        assert_eq!(rest, 0);
    }

    #[test]
    fn test_skill_levels_are_percentages() {
        assert!(SKILLS.iter().all(|s| s.level <= 100));
    }

    #[test]
    fn test_social_labels_are_unique() {
        // labels double as list keys
        let mut labels: Vec<_> = SOCIAL_LINKS.iter().map(|l| l.label).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), SOCIAL_LINKS.len());
    }
}
