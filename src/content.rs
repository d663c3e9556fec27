//! Static site content: profile copy, project catalog, tech stack levels,
//! timeline and workflow data.
//!
//! Everything on the informational pages is fixed at compile time; views
//! borrow from these tables and never copy them.

use once_cell::sync::Lazy;

/// Project genre used by the catalog filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Commercial,
    Documentary,
    MusicVideo,
    Corporate,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Commercial,
        Category::Documentary,
        Category::MusicVideo,
        Category::Corporate,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Commercial => "Commercial",
            Category::Documentary => "Documentary",
            Category::MusicVideo => "Music Video",
            Category::Corporate => "Corporate",
        }
    }
}

/// Current filter selection on the Projects page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.label(),
        }
    }
}

/// A portfolio entry
#[derive(Debug, Clone)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub tags: &'static [&'static str],
}

pub static PROJECTS: Lazy<Vec<Project>> = Lazy::new(|| {
    vec![
        Project {
            id: 1,
            title: "Brand Commercial: Elevate",
            description: "A dynamic commercial for Elevate sportswear, featuring fast-paced \
                          editing and vibrant color grading to highlight their latest athletic \
                          collection.",
            category: Category::Commercial,
            tags: &["Color Grading", "Motion Graphics"],
        },
        Project {
            id: 2,
            title: "Documentary: Urban Explorers",
            description: "A short-form documentary following urban explorers as they discover \
                          abandoned architectural wonders, employing moody atmospherics and \
                          thoughtful pacing.",
            category: Category::Documentary,
            tags: &["Storytelling", "Sound Design"],
        },
        Project {
            id: 3,
            title: "Music Video: Echo Chamber",
            description: "An experimental music video featuring abstract visuals and \
                          synchronized cuts, creating a hypnotic visual experience that \
                          complements the track.",
            category: Category::MusicVideo,
            tags: &["VFX", "Music Sync"],
        },
        Project {
            id: 4,
            title: "Corporate: Future Finance Summit",
            description: "Event highlight reel for a major financial technology conference, \
                          combining interviews, presentations, and networking moments into a \
                          cohesive narrative.",
            category: Category::Corporate,
            tags: &["Interview Editing", "Motion Graphics"],
        },
        Project {
            id: 5,
            title: "Commercial: Dream Away",
            description: "A luxury travel commercial showcasing exotic destinations with smooth \
                          transitions and cinematic color grading to evoke wanderlust.",
            category: Category::Commercial,
            tags: &["Aerial Footage", "Color Grading"],
        },
        Project {
            id: 6,
            title: "Documentary: Craftsmanship",
            description: "A mini-documentary series following artisans preserving traditional \
                          crafts, featuring intimate cinematography and thoughtful editing.",
            category: Category::Documentary,
            tags: &["Storytelling", "Interview Editing"],
        },
    ]
});

/// Filter the shipped catalog; re-evaluated in the view each time, never cached
pub fn filter_projects(filter: CategoryFilter) -> Vec<&'static Project> {
    matching(&PROJECTS, filter)
}

/// Entries of a catalog that pass a filter
pub fn matching(projects: &[Project], filter: CategoryFilter) -> Vec<&Project> {
    projects
        .iter()
        .filter(|project| filter.matches(project.category))
        .collect()
}

pub fn project_by_id(id: u32) -> Option<&'static Project> {
    PROJECTS.iter().find(|project| project.id == id)
}

// --- Profile ---

pub const NAME: &str = "Luca S.";
pub const INITIALS: &str = "LS";
pub const ROLE: &str = "VIDEO EDITOR";
pub const ROLE_LONG: &str = "VIDEO EDITOR & MOTION DESIGNER";
pub const TAGLINE: &str = "Professional Video Editor";

pub const HERO_BLURB: &str = "I specialize in creating visually stunning and seamless video \
    productions. With years of experience and a passion for creativity, I bring stories to \
    life, crafting innovative solutions in the dynamic world of video editing.";

pub const ABOUT_TEASER: &str = "With over 6 years of experience in video editing, I've worked \
    with brands, creators, and agencies to bring their visions to life. My approach combines \
    technical expertise with creative storytelling.";

pub const FOOTER_BLURB: &str = "Professional video editor specializing in commercial content, \
    documentaries, and creative projects. Bringing stories to life through innovative visual \
    storytelling.";

pub const JOURNEY: [&str; 4] = [
    "I'm a professional video editor with over 6 years of experience crafting compelling \
     visual narratives for a diverse range of clients, from startups to established brands \
     and creative agencies.",
    "My passion for video editing began during my time at the New York Film Academy, where I \
     honed my technical skills while developing a keen eye for storytelling and visual \
     composition. Since then, I've worked on numerous projects spanning commercials, \
     documentaries, corporate videos, and social media content.",
    "What sets me apart is my ability to balance technical precision with creative vision. I \
     believe that great video editing isn't just about cutting clips together - it's about \
     creating an emotional journey for viewers through thoughtful pacing, transitions, and \
     sound design.",
    "When I'm not in the editing room, I'm constantly exploring new techniques, staying \
     updated with industry trends, and experimenting with emerging technologies to push the \
     boundaries of what's possible in video production.",
];

// --- Contact details ---

pub const EMAIL: &str = "luca@example.com";
pub const PHONE: &str = "+1 (212) 555-1234";
pub const LOCATION_CITY: &str = "New York, NY";
pub const LOCATION_COUNTRY: &str = "United States";
pub const HOURS_WEEK: &str = "Monday - Friday: 9am - 6pm";
pub const HOURS_WEEKEND: &str = "Weekend: By appointment";

pub const SOCIALS: [&str; 3] = ["GitHub", "LinkedIn", "Instagram"];

// --- About page facts ---

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub static STATS: [Stat; 3] = [
    Stat {
        value: "150+",
        label: "Projects Completed",
    },
    Stat {
        value: "45+",
        label: "Happy Clients",
    },
    Stat {
        value: "6+",
        label: "Years Experience",
    },
];

pub struct TimelineEntry {
    pub years: &'static str,
    pub position: &'static str,
    pub company: &'static str,
    pub description: &'static str,
}

pub static TIMELINE: [TimelineEntry; 3] = [
    TimelineEntry {
        years: "2021 - Present",
        position: "Senior Video Editor",
        company: "Creative Minds Studio",
        description: "Lead video editor for major brand campaigns and documentary projects, \
                      supervising a team of junior editors and motion designers.",
    },
    TimelineEntry {
        years: "2018 - 2021",
        position: "Video Editor",
        company: "VisualPulse Media",
        description: "Created engaging content for social media platforms and edited \
                      promotional videos for various clients in the tech and fashion \
                      industries.",
    },
    TimelineEntry {
        years: "2016 - 2018",
        position: "Junior Video Editor",
        company: "NextGen Productions",
        description: "Assisted senior editors in post-production workflows, color grading, \
                      and audio synchronization for corporate and commercial projects.",
    },
];

pub struct Skill {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub static SKILLS: [Skill; 6] = [
    Skill {
        title: "Video Editing",
        description: "Expert in non-linear editing with seamless transitions, precise timing, \
                      and narrative flow.",
        icon: "📹",
    },
    Skill {
        title: "Color Grading",
        description: "Creating distinctive visual styles through advanced color correction \
                      and grading techniques.",
        icon: "🎨",
    },
    Skill {
        title: "Motion Graphics",
        description: "Designing eye-catching animations and kinetic typography for enhanced \
                      visual impact.",
        icon: "✨",
    },
    Skill {
        title: "Sound Design",
        description: "Implementing high-quality audio mixing, sound effects, and music \
                      synchronization.",
        icon: "🔊",
    },
    Skill {
        title: "Visual Effects",
        description: "Creating and integrating practical and digital effects for enhanced \
                      storytelling.",
        icon: "💫",
    },
    Skill {
        title: "Project Management",
        description: "Efficient workflow management, meeting deadlines, and client \
                      communication.",
        icon: "📁",
    },
];

// --- Stack page ---

pub struct TechItem {
    pub name: &'static str,
    /// Proficiency on a 0-10 scale
    pub level: f32,
}

pub struct TechSection {
    pub title: &'static str,
    pub items: &'static [TechItem],
}

pub static TECH_SECTIONS: [TechSection; 4] = [
    TechSection {
        title: "Editing Software",
        items: &[
            TechItem {
                name: "Adobe Premiere Pro",
                level: 9.5,
            },
            TechItem {
                name: "Final Cut Pro",
                level: 9.0,
            },
            TechItem {
                name: "DaVinci Resolve",
                level: 8.5,
            },
            TechItem {
                name: "Avid Media Composer",
                level: 7.0,
            },
        ],
    },
    TechSection {
        title: "Motion Graphics & VFX",
        items: &[
            TechItem {
                name: "Adobe After Effects",
                level: 9.0,
            },
            TechItem {
                name: "Cinema 4D",
                level: 7.5,
            },
            TechItem {
                name: "Blender",
                level: 6.0,
            },
            TechItem {
                name: "Nuke",
                level: 5.0,
            },
        ],
    },
    TechSection {
        title: "Color Grading",
        items: &[
            TechItem {
                name: "DaVinci Resolve Color",
                level: 9.0,
            },
            TechItem {
                name: "Lumetri Color",
                level: 8.5,
            },
            TechItem {
                name: "FilmConvert",
                level: 8.0,
            },
        ],
    },
    TechSection {
        title: "Audio Editing",
        items: &[
            TechItem {
                name: "Adobe Audition",
                level: 8.0,
            },
            TechItem {
                name: "Pro Tools",
                level: 6.5,
            },
            TechItem {
                name: "Logic Pro",
                level: 7.0,
            },
        ],
    },
];

pub const TOOLBOX_INTRO: [&str; 2] = [
    "As a professional video editor, I leverage a diverse set of industry-standard tools and \
     software to deliver high-quality content. My technical stack enables me to handle \
     everything from raw footage processing to sophisticated effects and color grading.",
    "I continuously update my skills and explore emerging technologies to stay at the cutting \
     edge of video production capabilities, ensuring I can tackle any creative challenge.",
];

pub struct WorkflowPhase {
    pub phase: &'static str,
    pub title: &'static str,
    pub steps: &'static [&'static str],
}

pub static WORKFLOW: [WorkflowPhase; 3] = [
    WorkflowPhase {
        phase: "01",
        title: "Pre-Production",
        steps: &[
            "Project briefing and goals definition",
            "Creative concept development",
            "Storyboarding and shot planning",
            "Technical requirements assessment",
        ],
    },
    WorkflowPhase {
        phase: "02",
        title: "Production",
        steps: &[
            "Media management and organization",
            "Rough cut assembly",
            "Scene refinement and timing",
            "Client feedback implementation",
        ],
    },
    WorkflowPhase {
        phase: "03",
        title: "Post-Production",
        steps: &[
            "Color grading and visual effects",
            "Sound design and audio mixing",
            "Motion graphics integration",
            "Final delivery and archiving",
        ],
    },
];

// --- Projects page copy ---

pub const PROJECTS_INTRO: &str = "Browse through my portfolio of video editing projects \
    spanning various genres and styles. Each project represents a unique storytelling \
    approach, technical challenge, and creative solution. Hover over any project to learn \
    more about the editing process and techniques used.";

pub const PROJECTS_CTA: &str = "Interested in working together on your next video project?";

// --- Contact page FAQ ---

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub static FAQ: [FaqEntry; 4] = [
    FaqEntry {
        question: "What types of video projects do you work on?",
        answer: "I specialize in commercial videos, documentaries, music videos, corporate \
                 videos, and social media content. However, I'm open to discussing any video \
                 project regardless of type or genre.",
    },
    FaqEntry {
        question: "What is your typical turnaround time?",
        answer: "Turnaround time varies based on project complexity, length, and my current \
                 workload. For standard projects, I typically deliver a first draft within \
                 1-2 weeks. We'll establish a clear timeline during our initial consultation.",
    },
    FaqEntry {
        question: "Do you offer revisions?",
        answer: "Yes, my standard packages include 2-3 rounds of revisions. Additional \
                 revisions can be arranged at an hourly rate. I'm committed to ensuring \
                 you're completely satisfied with the final result.",
    },
    FaqEntry {
        question: "How do we get started on a project?",
        answer: "The first step is to reach out through the contact form with details about \
                 your project. I'll then schedule a consultation call to discuss your vision, \
                 requirements, and timeline before providing a customized quote.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_filter_returns_whole_catalog() {
        assert_eq!(filter_projects(CategoryFilter::All).len(), PROJECTS.len());
        assert_eq!(PROJECTS.len(), 6);
    }

    #[test]
    fn test_documentary_filter() {
        let docs = filter_projects(CategoryFilter::Only(Category::Documentary));
        let titles: Vec<&str> = docs.iter().map(|p| p.title).collect();
        assert_eq!(
            titles,
            vec!["Documentary: Urban Explorers", "Documentary: Craftsmanship"]
        );
    }

    #[test]
    fn test_every_category_has_projects() {
        // The shipped catalog never produces an empty grid, the reset
        // affordance only appears if the data changes
        for category in Category::ALL {
            assert!(!filter_projects(CategoryFilter::Only(category)).is_empty());
        }
    }

    #[test]
    fn test_filter_without_matches_yields_empty_result() {
        let catalog = vec![Project {
            id: 1,
            title: "Brand Commercial: Elevate",
            description: "",
            category: Category::Commercial,
            tags: &[],
        }];
        assert!(matching(&catalog, CategoryFilter::Only(Category::Documentary)).is_empty());
        assert_eq!(matching(&catalog, CategoryFilter::All).len(), 1);
    }

    #[test]
    fn test_project_ids_unique() {
        let mut ids: Vec<u32> = PROJECTS.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn test_project_lookup() {
        assert_eq!(
            project_by_id(3).map(|p| p.title),
            Some("Music Video: Echo Chamber")
        );
        assert!(project_by_id(99).is_none());
    }
}
