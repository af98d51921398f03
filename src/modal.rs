//! Experience and project details shown in a dialog over the backdrop.

const PLACEHOLDER_IMAGE: &str = "https://placehold.co/800x500/FFF8F0/5382A1?text=";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallToAction {
    pub label: &'static str,
    pub href: &'static str,
    /// Opens outside the application.
    pub external: bool,
}

#[derive(Debug, PartialEq)]
pub enum Entry {
    /// A position or a degree.
    Detail {
        title: &'static str,
        organization: &'static str,
        /// "Duration" or "Completed".
        period_label: &'static str,
        period: &'static str,
        summary: &'static str,
        logo: Option<&'static str>,
        link: Option<&'static str>,
        link_label: Option<&'static str>,
        cta: Option<CallToAction>,
    },
    Project {
        title: &'static str,
        description: &'static str,
        image: &'static str,
        tech: &'static [&'static str],
        link: Option<&'static str>,
        cta: Option<CallToAction>,
    },
}

/// What to put where an entry's picture goes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Picture {
    File(&'static str),
    Placeholder(String),
}

const VIEW_ON_GITHUB: CallToAction = CallToAction {
    label: "View on GitHub",
    href: "https://github.com/pradeepprp",
    external: true,
};

const KONGU_LOCATION: &str = "https://www.instagram.com/explore/locations/138452983279938/kongu-matriculation-higher-secondary-school-karumandampalayam/";

pub static ENTRIES: &[(&str, Entry)] = &[
    (
        "beetalogic",
        Entry::Detail {
            title: "Java Developer",
            organization: "Beetalogic Software Solutions",
            period_label: "Duration",
            period: "Present",
            summary: "Currently working on Java-based projects using Core Java, Spring Boot, and MySQL. \
                      Involved in backend development and API creation for ongoing projects at Beetalogic Solutions.",
            logo: Some("images/Beetalogic.soln.png"),
            link: Some("https://beetalogic.com/"),
            link_label: None,
            cta: None,
        },
    ),
    (
        "rinex",
        Entry::Detail {
            title: "Java Developer Intern",
            organization: "Rinex Techno Solutions",
            period_label: "Duration",
            period: "Nov 2023 – Apr 2024",
            summary: "Gained hands-on experience in Core Java, OOPS concepts, and exception handling through \
                      guided training sessions and real-time tasks. Worked on mini-projects using Java, JDBC, \
                      and MySQL to understand database integration.",
            logo: Some("images/rinex.png"),
            link: Some("https://rinex.ai/"),
            link_label: None,
            cta: None,
        },
    ),
    (
        "gce",
        Entry::Detail {
            title: "B.E. in Electronics and Communication",
            organization: "Government College of Engineering, Erode",
            period_label: "Duration",
            period: "2020 – 2024",
            summary: "Completed Bachelor of Engineering with a CGPA of 7.8. Gained strong foundation in \
                      engineering principles and problem-solving skills.",
            logo: Some("images/GCE-Erode.png"),
            link: Some("https://www.gcee.ac.in/"),
            link_label: None,
            cta: None,
        },
    ),
    (
        "kongu",
        Entry::Detail {
            title: "Higher Secondary (HSC)",
            organization: "Kongu Matriculation Hr. Sec. School",
            period_label: "Completed",
            period: "2020",
            summary: "Grade: 80%",
            logo: Some("images/Kongu-School.png"),
            link: Some(KONGU_LOCATION),
            link_label: None,
            cta: None,
        },
    ),
    (
        "kongu-sslc",
        Entry::Detail {
            title: "SSLC",
            organization: "Kongu Matriculation School",
            period_label: "Completed",
            period: "2018",
            summary: "Grade: 89%",
            logo: Some("images/Kongu-School.png"),
            link: Some(KONGU_LOCATION),
            link_label: None,
            cta: None,
        },
    ),
    (
        "travelo",
        Entry::Project {
            title: "Travelo",
            description: "A comprehensive travel booking application built on the SpringBoot framework. \
                          Features robust backend logic for searching and booking travel services with a \
                          clean, user-friendly interface.",
            image: "images/travel_11zon.png",
            tech: &["SpringBoot", "MySQL", "HTML/CSS", "JavaScript"],
            link: None,
            cta: Some(VIEW_ON_GITHUB),
        },
    ),
    (
        "car-access",
        Entry::Project {
            title: "Car Access Hub",
            description: "A web platform designed for managing car rentals and vehicle sharing. Allows users \
                          to book, track, and manage vehicle access through a clean interface with proper \
                          backend functionality.",
            image: "images/car_11zon.png",
            tech: &["PHP", "MySQL", "HTML/CSS", "JavaScript"],
            link: None,
            cta: Some(VIEW_ON_GITHUB),
        },
    ),
    (
        "ascentz",
        Entry::Project {
            title: "Ascentz Technologies Website",
            description: "Developed the official static website for Ascentz Technologies. Focused on creating \
                          a responsive, mobile-first design to clearly present company services and information.",
            image: "images/ascentz_11zon.png",
            tech: &["PHP", "HTML/CSS", "JavaScript", "Bootstrap"],
            link: None,
            cta: Some(VIEW_ON_GITHUB),
        },
    ),
    (
        "boutique",
        Entry::Project {
            title: "Boutique Shop",
            description: "A dynamic e-commerce site for a small boutique. Implemented product listings, a \
                          shopping cart, and user account management using Java Servlets for the backend with \
                          proper database integration.",
            image: "images/botique_11zon.png",
            tech: &["Java Servlet", "JSP", "MySQL", "HTML/CSS"],
            link: None,
            cta: Some(VIEW_ON_GITHUB),
        },
    ),
];

pub fn lookup(key: &str) -> Option<&'static Entry> {
    ENTRIES
        .iter()
        .find(|(entry_key, _)| *entry_key == key)
        .map(|(_, entry)| entry)
}

impl Entry {
    pub fn title(&self) -> &'static str {
        match self {
            Entry::Detail { title, .. } | Entry::Project { title, .. } => *title,
        }
    }

    pub fn subtitle(&self) -> Option<&'static str> {
        match self {
            Entry::Detail { organization, .. } => Some(*organization),
            Entry::Project { .. } => None,
        }
    }

    pub fn body(&self) -> String {
        match self {
            Entry::Detail {
                period_label,
                period,
                summary,
                ..
            } => format!("{}: {}\n\n{}", period_label, period, summary),
            Entry::Project { description, .. } => description.to_string(),
        }
    }

    pub fn tech(&self) -> &'static [&'static str] {
        match self {
            Entry::Project { tech, .. } => *tech,
            Entry::Detail { .. } => &[],
        }
    }

    /// An explicit call-to-action wins; otherwise the plain link becomes one.
    pub fn call_to_action(&self) -> Option<CallToAction> {
        match self {
            Entry::Project { cta, link, .. } => cta.or_else(|| {
                link.map(|href| CallToAction {
                    label: "Visit Project",
                    href,
                    external: true,
                })
            }),
            Entry::Detail {
                cta,
                link,
                link_label,
                ..
            } => cta.or_else(|| {
                link.map(|href| CallToAction {
                    label: link_label.unwrap_or("Visit Website"),
                    href,
                    external: href.starts_with("http"),
                })
            }),
        }
    }

    /// Placeholder shown when the image cannot be loaded.
    pub fn fallback_image(&self) -> String {
        placeholder_image(self.title())
    }

    /// The picture to show given which files can be loaded. Projects fall back
    /// to a placeholder; a missing logo is simply left out.
    pub fn picture<F>(&self, available: F) -> Option<Picture>
    where
        F: Fn(&str) -> bool,
    {
        match self {
            Entry::Project { image, .. } if available(image) => Some(Picture::File(*image)),
            Entry::Project { .. } => Some(Picture::Placeholder(self.fallback_image())),
            Entry::Detail { logo, .. } => logo.filter(|logo| available(logo)).map(Picture::File),
        }
    }
}

/// Each run of whitespace in `title` becomes a single `+`.
pub fn placeholder_image(title: &str) -> String {
    if title.is_empty() {
        return format!("{}Project", PLACEHOLDER_IMAGE);
    }
    let mut url = String::from(PLACEHOLDER_IMAGE);
    let mut in_space = false;
    for c in title.chars() {
        if c.is_whitespace() {
            if !in_space {
                url.push('+');
            }
            in_space = true;
        } else {
            url.push(c);
            in_space = false;
        }
    }
    url
}

/// Which entry, if any, is currently presented.
#[derive(Debug, Default)]
pub struct Modal {
    open: Option<&'static Entry>,
}

impl Modal {
    pub fn current(&self) -> Option<&'static Entry> {
        self.open
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Presents the entry for `key`. Returns `false` for unknown keys.
    pub fn open(&mut self, key: &str) -> bool {
        match lookup(key) {
            Some(entry) => {
                log::debug!("opening details for {}", key);
                self.open = Some(entry);
                true
            }
            None => {
                log::debug!("no details for {}", key);
                false
            }
        }
    }

    /// Returns `false` when nothing was open.
    pub fn close(&mut self) -> bool {
        self.open.take().is_some()
    }
}
