//! Static page content: everything rendered that never changes at runtime.

/// In-page anchor ids for the navigable sections.
pub mod anchor {
    pub const ABOUT: &str = "about";
    pub const PROJECTS: &str = "projects";
    pub const ACHIEVEMENTS: &str = "achievements";
    pub const CONTACT: &str = "contact";
}

pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

impl NavLink {
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

pub fn nav_links() -> Vec<NavLink> {
    vec![
        NavLink { label: "About", anchor: anchor::ABOUT },
        NavLink { label: "Projects", anchor: anchor::PROJECTS },
        NavLink { label: "Achievements", anchor: anchor::ACHIEVEMENTS },
        NavLink { label: "Contact", anchor: anchor::CONTACT },
    ]
}

/// Identity and contact details shown in the hero, contact section, and footer.
pub struct Profile {
    pub name: &'static str,
    pub quote: &'static str,
    pub expertise_line: &'static str,
    pub portrait: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub linkedin: &'static str,
    pub github: &'static str,
}

pub fn profile() -> Profile {
    Profile {
        name: "A K M Sazzadul Alam",
        quote: "Passionate about security and obsessed with data and AI",
        expertise_line: "Cybersecurity | Autonomous Driving | AI & ML | Data Analytics",
        portrait: "/public/portrait.jpg",
        email: "alamakmsazzadul@gmail.com",
        phone: "+1(713) 820-8097",
        location: "Houston, Texas, USA",
        linkedin: "https://linkedin.com/in/a-k-m-sazzadul-alam/",
        github: "https://github.com/sazzad2024",
    }
}

/// The two tagline columns flanking the hero portrait.
pub fn hero_taglines() -> (Vec<&'static str>, Vec<&'static str>) {
    (
        vec![
            "\u{1F510} Cybersecurity with AI",
            "\u{1F697} Autonomous Driving Research",
            "\u{26A1} Full Stack AI/ML",
            "\u{1F9E0} RAG & Agentic AI",
        ],
        vec![
            "\u{1F6E1}\u{FE0F} Security Architect",
            "\u{1F4BB} IT Support & Data Analyst",
            "\u{1F3E2} Data Center Operations",
            "\u{1F4CA} Project Management",
        ],
    )
}

pub fn about_paragraphs() -> Vec<&'static str> {
    vec![
        "I am a cybersecurity professional with over 13 years of experience, currently pursuing my MS in Cybersecurity at the University of Houston and serving as a Manager at the USDOT Tier-1 UTC Transportation Cybersecurity Center for Advanced Research and Education (CYBER-CARE).",
        "My expertise spans from traditional IT security roles as a Senior Security Architect in Bangladesh Government Service to cutting-edge AI/ML research in autonomous vehicles and cybersecurity. I've led teams of 100+ engineers, received national awards for cybersecurity initiatives, and have extensive experience in network security, data analysis, and AI-driven security solutions.",
    ]
}

pub struct HighlightCard {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

pub fn highlight_cards() -> Vec<HighlightCard> {
    vec![
        HighlightCard {
            title: "Current Focus",
            items: &[
                "Deep RL for AV Perception Validation",
                "AI-powered Transportation Asset Management",
                "Multi-agent AI Systems for Healthcare",
                "RAG-based Cybersecurity Compliance",
            ],
        },
        HighlightCard {
            title: "Key Achievements",
            items: &[
                "2 National Awards for Cybersecurity Leadership",
                "3 Published Research Papers",
                "Manager at USDOT CYBER-CARE Center",
                "Led 100+ Engineer Teams",
            ],
        },
    ]
}

pub struct Project {
    pub title: &'static str,
    pub desc: &'static str,
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            title: "AI-Powered Cybersecurity Compliance RAG System",
            desc: "Developed RAG system using LangChain, Pinecone, and Google Gemini 2.5 Pro for NIST CSF and ISO 27001 compliance queries with 90%+ accuracy. Built full-stack application with FastAPI backend and Streamlit frontend.",
        },
        Project {
            title: "Deep RL for AV Perception Validation",
            desc: "Constructed training data pipeline using PointPillars and YOLOv8 consistency analysis on Waymo dataset. Developing deep RL-based confidence calibration system using PPO algorithm to refine LiDAR detection reliability.",
        },
        Project {
            title: "Multi-Agent AI System for Healthcare",
            desc: "Developed multi-agent AI system with 12+ specialized agents using CrewAI framework for clinical evaluation processing, achieving 95%+ transcription accuracy and 80% reduction in manual processing time.",
        },
        Project {
            title: "Human-in-the-Loop Pentesting Framework",
            desc: "Built LLM-driven pentesting framework that plans actions with Google Gemini/OpenAI/Ollama and executes authorized scans via Nmap/Nuclei with user approval gates and structured evidence store.",
        },
        Project {
            title: "AI-Powered Transportation Asset Management",
            desc: "Designed and deployed AI-powered transportation asset management system using YOLOv8 and CNN that automated traffic infrastructure monitoring, achieving 90%+ accuracy with 2-5s/image processing time.",
        },
        Project {
            title: "Network Intrusion Detection System",
            desc: "Performed end-to-end EDA, dimensionality reduction (PCA), and multiclass classification of attack types using Decision Tree, Random Forest & XGBoost algorithms, achieving 95% classification accuracy.",
        },
    ]
}

/// Left-border accent on experience entries.
#[derive(Clone, Copy)]
pub enum RoleAccent {
    Blue,
    Green,
    Purple,
    Orange,
    Red,
    Indigo,
    Teal,
    Yellow,
    Pink,
}

impl RoleAccent {
    pub fn class(self) -> &'static str {
        match self {
            RoleAccent::Blue => "border-l-4 border-blue-500 pl-4",
            RoleAccent::Green => "border-l-4 border-green-500 pl-4",
            RoleAccent::Purple => "border-l-4 border-purple-500 pl-4",
            RoleAccent::Orange => "border-l-4 border-orange-500 pl-4",
            RoleAccent::Red => "border-l-4 border-red-500 pl-4",
            RoleAccent::Indigo => "border-l-4 border-indigo-500 pl-4",
            RoleAccent::Teal => "border-l-4 border-teal-500 pl-4",
            RoleAccent::Yellow => "border-l-4 border-yellow-500 pl-4",
            RoleAccent::Pink => "border-l-4 border-pink-500 pl-4",
        }
    }
}

pub struct Role {
    pub title: &'static str,
    pub org: &'static str,
    pub period: &'static str,
    pub accent: RoleAccent,
    pub highlights: &'static [&'static str],
    pub technologies: &'static str,
}

pub fn current_roles() -> Vec<Role> {
    vec![
        Role {
            title: "Research Assistant: Transportation AI/ML Project",
            org: "CYBER-CARE LAB, University of Houston",
            period: "Aug 2025 - Present",
            accent: RoleAccent::Blue,
            highlights: &[
                "Designed and deployed AI-powered transportation asset management system (YOLOv8, CNN) that automated traffic infrastructure monitoring",
                "Implemented and fine-tuned 6 computer vision models for traffic signal/sign detection and damage assessment, achieving 90%+ accuracy with 2-5s/image processing time",
            ],
            technologies: "Python, FastAPI, PyTorch, YOLOv8, React, Google Cloud, Docker",
        },
        Role {
            title: "AI Application Development Intern",
            org: "Deepnestai, Baton Rouge, Louisiana",
            period: "May 2025 - July 2025",
            accent: RoleAccent::Green,
            highlights: &[
                "Developed multi-agent AI system with 12+ specialized agents using CrewAI framework for clinical evaluation processing",
                "Achieved 95%+ transcription accuracy and 80% reduction in manual processing time",
                "Architected full-stack application using Asynchronous Quart backend and Next.js frontend, deployed on Google Cloud Platform",
            ],
            technologies: "Python, Next.js, CrewAI, Google Cloud Platform, Docker, OAuth 2",
        },
        Role {
            title: "Research Assistant: Autonomous Driving Research",
            org: "CYBER-CARE LAB, University of Houston",
            period: "Oct 2024 - Present",
            accent: RoleAccent::Purple,
            highlights: &[
                "Developing machine learning model to reduce LiDAR False Positives via Camera Consistency in Autonomous Driving",
                "Working on The Geometric Validator: Improving Camera Confidence quality via LiDAR Consistency in Autonomous Driving",
            ],
            technologies: "OpenPCDet framework, PointPillars, YOLOv8, SLURM, Waymo Open Dataset, TFRecord processing, High Performance Computing (HPC)",
        },
        Role {
            title: "Manager",
            org: "USDOT Tier-1 UTC Transportation Cybersecurity Center (CYBER-CARE)",
            period: "Oct 2024 - Present",
            accent: RoleAccent::Orange,
            highlights: &[
                "Leading strategic initiatives for transportation cybersecurity research and education",
                "Managing research projects and coordinating with government agencies and industry partners",
            ],
            technologies: "",
        },
    ]
}

pub fn previous_roles() -> Vec<Role> {
    vec![
        Role {
            title: "Senior Security Architect",
            org: "Government Service, Bangladesh",
            period: "Nov 2020 - Jul 2024",
            accent: RoleAccent::Red,
            highlights: &[
                "Designed and implemented security architecture for Headquarters and nationwide branch offices supporting over 10,000 users",
                "Conducted 20+ risk assessments and threat modeling exercises, reducing critical vulnerabilities by 40% over 2 years",
                "Led deployment of security technologies including IDS, Firewalls, WAF and IAM systems, improving incident detection time by 60%",
            ],
            technologies: "SIEM, IAM, Firewalls, NIST CSF, Risk Assessment, Threat Modeling",
        },
        Role {
            title: "Security Architect",
            org: "Government Service, Bangladesh",
            period: "Jan 2018 - Oct 2020",
            accent: RoleAccent::Indigo,
            highlights: &[
                "Led the design and implementation of a Security Operations Center (SOC) using Wazuh, Snort, and the ELK Stack",
                "Established centralized log management, real-time threat detection, and incident response capabilities",
                "Enhanced organizational security posture by leveraging Trend Micro Endpoint Agents and Deep Discovery Inspector (DDI)",
                "Automated alerting and correlation across 500+ endpoints, significantly improving threat detection and response",
            ],
            technologies: "Wazuh, ELK Stack, SOC, Network Security, Log Management, Threat Detection, Incident Response",
        },
        Role {
            title: "IT Support Engineer",
            org: "Government Service, Bangladesh",
            period: "Sep 2015 - Dec 2017",
            accent: RoleAccent::Teal,
            highlights: &[
                "Provided IT infrastructure support including router/switch configuration, LAN/WAN testing, and centralized Wi-Fi maintenance",
                "Managed data center renovation, operations, and maintenance, improving system reliability and availability",
                "Implemented endpoint security solutions through antivirus and Active Directory management",
                "Reduced user downtime by 99% and improved satisfaction by 40% through proactive IT support",
                "Oversaw PABX system, ERP software, and IT inventory management",
            ],
            technologies: "Routers/Switches, LAN/WAN, Wi-Fi, Active Directory, Antivirus/Endpoint Security, PABX, ERP Systems, Data Center Operations",
        },
        Role {
            title: "Data Analyst",
            org: "Government Service, Bangladesh",
            period: "Jun 2012 - Aug 2015",
            accent: RoleAccent::Yellow,
            highlights: &[
                "Analyzed large communication and financial datasets using Excel and i2 Analyst's Notebook",
                "Performed fraud risk analysis by applying link analysis and pattern recognition to detect irregular activities",
                "Created dashboards and visual reports to summarize findings and support data-driven decision-making for leadership",
            ],
            technologies: "Excel, i2 Analyst's Notebook, Data Visualization, Fraud Risk Analysis, Pattern Recognition",
        },
        Role {
            title: "Security Engineer",
            org: "Grameenphone, Dhaka, Bangladesh",
            period: "Oct 2010 - May 2012",
            accent: RoleAccent::Pink,
            highlights: &[
                "Configured, managed, and upgraded Firewall (FW), Intrusion Detection Systems (IDS), and Intrusion Prevention Systems (IPS) appliances",
                "Ensured robust network security infrastructure and threat protection",
                "Troubleshot and optimized VPN performance, reducing latency and improving connection reliability by 30%",
            ],
            technologies: "Firewall, IDS, IPS, VPN, IPSec, SSL VPN, Site-to-Site VPN, Network Security, Performance Optimization",
        },
    ]
}

pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static str,
}

pub fn skill_categories() -> Vec<SkillCategory> {
    vec![
        SkillCategory {
            name: "Cybersecurity Tools",
            skills: "Kali, Wireshark, Nessus, Snort, Nmap, Burp Suite, ELK, Wazuh, Suricata",
        },
        SkillCategory {
            name: "Machine Learning",
            skills: "Python, PyTorch, TensorFlow, Scikit-learn, XGBoost, Hugging Face, Ollama",
        },
        SkillCategory {
            name: "Computer Vision",
            skills: "OpenCV, YOLOv8, LiDAR Processing, 3D Object Detection, Sensor Fusion",
        },
        SkillCategory {
            name: "Cloud & DevOps",
            skills: "GCP, Azure, AWS, Docker, MLOps, Kubernetes",
        },
        SkillCategory {
            name: "Security Frameworks",
            skills: "NIST CSF, ISO/IEC 27001, CIS Controls",
        },
        SkillCategory {
            name: "Languages & Databases",
            skills: "Python, R, SQL, MongoDB, ChromaDB, Bash/Shell, PowerShell",
        },
        SkillCategory {
            name: "Web Development",
            skills: "React, Node.js, FastAPI, Quart, HTML/CSS, JavaScript",
        },
        SkillCategory {
            name: "Leadership Skills",
            skills: "Team Management, Project Management, Vendor Management, Stakeholder Communication",
        },
    ]
}

pub struct Degree {
    pub title: &'static str,
    pub school: &'static str,
    pub period: &'static str,
    pub coursework: &'static str,
}

pub fn degrees() -> Vec<Degree> {
    vec![
        Degree {
            title: "Master's in Cybersecurity",
            school: "University of Houston",
            period: "Expected December 2025",
            coursework: "Relevant Coursework: Network Security, Enterprise Security, Cybersecurity Tools, Data Science, Machine Learning, Applied Cryptography",
        },
        Degree {
            title: "BSc in Electronics & Communication Engineering",
            school: "Khulna University of Eng. and Tech., Bangladesh",
            period: "2006 - 2010",
            coursework: "Relevant Coursework: C, C++, Data Structures and Algorithms, Computer Networking, Advanced Statistics",
        },
    ]
}

pub struct CertGroup {
    pub marker: &'static str,
    pub marker_class: &'static str,
    pub title: &'static str,
    pub detail: &'static str,
}

pub fn certifications() -> Vec<CertGroup> {
    vec![
        CertGroup {
            marker: "\u{2713}",
            marker_class: "text-green-500 mt-1",
            title: "HPE DSI Certifications (2024-25)",
            detail: "Python, R, Machine Learning, Data Management, Excel & Power BI, Cluster Computing: Linux, Shell Scripting",
        },
        CertGroup {
            marker: "\u{1F4DA}",
            marker_class: "text-blue-500 mt-1",
            title: "In Progress",
            detail: "CISSP, Pentesting with Kali, RHCSA & RHCE, CCNA",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_links_target_known_anchors() {
        let links = nav_links();
        assert_eq!(links.len(), 4);
        let anchors = [
            anchor::ABOUT,
            anchor::PROJECTS,
            anchor::ACHIEVEMENTS,
            anchor::CONTACT,
        ];
        for (link, expected) in links.iter().zip(anchors) {
            assert_eq!(link.anchor, expected);
            assert_eq!(link.href(), format!("#{expected}"));
            assert!(!link.label.is_empty());
        }
    }

    #[test]
    fn test_projects_have_content() {
        let projects = projects();
        assert_eq!(projects.len(), 6);
        for p in &projects {
            assert!(!p.title.is_empty());
            assert!(!p.desc.is_empty());
        }
    }

    #[test]
    fn test_roles_have_titles_and_highlights() {
        for role in current_roles().iter().chain(previous_roles().iter()) {
            assert!(!role.title.is_empty());
            assert!(!role.org.is_empty());
            assert!(!role.period.is_empty());
            assert!(!role.highlights.is_empty());
        }
    }

    #[test]
    fn test_contact_identifiers_well_formed() {
        let p = profile();
        assert!(p.email.contains('@'));
        assert!(p.linkedin.starts_with("https://"));
        assert!(p.github.starts_with("https://"));
    }

    #[test]
    fn test_expertise_grid_is_full() {
        assert_eq!(skill_categories().len(), 8);
    }
}
