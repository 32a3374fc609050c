//! Static page content: hero copy, about text, skills, stats, and contact
//! channels. Everything remote (projects, services) comes from the API; this
//! module is the locally-authored half of the page.

use once_cell::sync::Lazy;

/// Identity and hero copy
pub struct Profile {
    pub brand: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub about_heading: &'static str,
    pub about_text: &'static str,
}

pub const PROFILE: Profile = Profile {
    brand: "Dev.Shuaib",
    name: "Mohd Shuaib",
    role: "Full Stack Developer",
    tagline: "I turn code into user experiences. Front to back. Fast. Scalable. Reliable.",
    about_heading: "Turning Code Into Creativity",
    about_text: "BCA student skilled in C and C++, with extensive experience in modern web \
                 development. I build scalable web solutions that drive results and create \
                 meaningful digital experiences.",
};

/// A technical skill with a 0-100 proficiency level
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
    pub category: &'static str,
}

pub static SKILLS: Lazy<Vec<Skill>> = Lazy::new(|| {
    vec![
        Skill { name: "HTML5", level: 90, category: "Frontend" },
        Skill { name: "CSS3", level: 85, category: "Frontend" },
        Skill { name: "JavaScript", level: 88, category: "Frontend" },
        Skill { name: "React", level: 85, category: "Frontend" },
        Skill { name: "Node.js", level: 80, category: "Backend" },
        Skill { name: "MongoDB", level: 75, category: "Database" },
        Skill { name: "Next.js", level: 82, category: "Framework" },
        Skill { name: "Express.js", level: 78, category: "Backend" },
    ]
});

/// A headline stat for the about section
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat { label: "Projects Completed", value: "15+" },
    Stat { label: "Happy Clients", value: "8+" },
    Stat { label: "Cups of Coffee", value: "500+" },
    Stat { label: "Certifications", value: "5+" },
];

pub const ABOUT_POINTS: [&str; 4] = [
    "Full-Stack Developer With a Vision",
    "Scalable Web Solutions Expert",
    "From Concept to Code Engineering",
    "Innovative, Reliable & Passionate",
];

/// A contact channel shown next to the contact form
pub struct ContactChannel {
    pub label: &'static str,
    pub value: &'static str,
}

pub const CONTACT_CHANNELS: [ContactChannel; 3] = [
    ContactChannel { label: "Email", value: "heyshuaib43@gmail.com" },
    ContactChannel { label: "Phone", value: "+91 8979302837" },
    ContactChannel { label: "Location", value: "Meerut, Uttar Pradesh, India" },
];

/// A social/quick link shown in the contact section. `target` is `None` for
/// profiles that are not public yet; those render as a bare label.
pub struct SocialLink {
    pub label: &'static str,
    pub target: Option<&'static str>,
}

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink { label: "GitHub", target: None },
    SocialLink { label: "Email", target: Some("mohdshuaib@example.com") },
    SocialLink { label: "Website", target: None },
    SocialLink { label: "Phone", target: Some("+91 8979403827") },
];
