//! Career track definitions and the built-in track table

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three fixed stages of a learning plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Foundation,
    Advanced,
    Specialization,
}

impl Phase {
    pub const ALL: [Phase; 3] = [Phase::Foundation, Phase::Advanced, Phase::Specialization];

    pub fn name(&self) -> &'static str {
        match self {
            Phase::Foundation => "Foundation",
            Phase::Advanced => "Advanced",
            Phase::Specialization => "Specialization",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named career path with its required skills and demand metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerTrack {
    pub name: String,

    /// Ordered; "top N" truncations keep the declared order.
    pub core_skills: Vec<String>,

    pub emerging_skills: Vec<String>,

    /// Current market demand (0-100)
    pub market_demand_score: u8,

    /// Projected future demand (0-100)
    pub future_demand_score: u8,

    pub growth_rate_percent: f64,

    #[serde(default)]
    pub roadmap: RoadmapTemplates,
}

/// Per-phase project and certification templates attached to a track.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoadmapTemplates {
    #[serde(default)]
    pub foundation: PhaseTemplate,
    #[serde(default)]
    pub advanced: PhaseTemplate,
    #[serde(default)]
    pub specialization: PhaseTemplate,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhaseTemplate {
    #[serde(default)]
    pub projects: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
}

impl RoadmapTemplates {
    pub fn for_phase(&self, phase: Phase) -> &PhaseTemplate {
        match phase {
            Phase::Foundation => &self.foundation,
            Phase::Advanced => &self.advanced,
            Phase::Specialization => &self.specialization,
        }
    }
}

impl CareerTrack {
    pub fn new(
        name: &str,
        core_skills: &[&str],
        emerging_skills: &[&str],
        market_demand_score: u8,
        future_demand_score: u8,
        growth_rate_percent: f64,
    ) -> Self {
        Self {
            name: name.to_string(),
            core_skills: to_strings(core_skills),
            emerging_skills: to_strings(emerging_skills),
            market_demand_score,
            future_demand_score,
            growth_rate_percent,
            roadmap: RoadmapTemplates::default(),
        }
    }

    pub fn with_phase(mut self, phase: Phase, projects: &[&str], certifications: &[&str]) -> Self {
        let template = PhaseTemplate {
            projects: to_strings(projects),
            certifications: to_strings(certifications),
        };
        match phase {
            Phase::Foundation => self.roadmap.foundation = template,
            Phase::Advanced => self.roadmap.advanced = template,
            Phase::Specialization => self.roadmap.specialization = template,
        }
        self
    }

    /// Human label for the growth rate used in recommendation rationales.
    pub fn demand_label(&self) -> &'static str {
        if self.growth_rate_percent > 30.0 {
            "High Emerging Demand"
        } else if self.growth_rate_percent > 15.0 {
            "Growing Steadily"
        } else {
            "Stable"
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Built-in track table in declaration order. Ranking ties fall back to this order.
pub fn builtin_tracks() -> Vec<CareerTrack> {
    vec![
        CareerTrack::new(
            "Data Scientist",
            &["python", "statistics", "machine learning", "sql", "data analysis"],
            &["genai", "mlops", "llm", "vector databases", "ai ethics"],
            95,
            98,
            35.0,
        )
        .with_phase(
            Phase::Foundation,
            &[
                "Build a data analysis dashboard using Python and Pandas",
                "Create a simple machine learning model for prediction",
                "Analyze a real-world dataset and create visualizations",
            ],
            &["Python for Data Science", "SQL Fundamentals"],
        )
        .with_phase(
            Phase::Advanced,
            &[
                "Develop a recommendation system using collaborative filtering",
                "Build a natural language processing pipeline",
                "Create a time series forecasting model",
            ],
            &["Machine Learning Specialization", "Deep Learning Certification"],
        )
        .with_phase(
            Phase::Specialization,
            &[
                "Build a GenAI-powered chatbot using LLMs",
                "Develop an MLOps pipeline for model deployment",
                "Create a vector database for semantic search",
            ],
            &["AWS Machine Learning", "Google Cloud AI/ML"],
        ),
        CareerTrack::new(
            "Software Engineer",
            &["programming", "algorithms", "data structures", "version control", "testing"],
            &["cloud native", "microservices", "devops", "kubernetes", "serverless"],
            90,
            92,
            25.0,
        )
        .with_phase(
            Phase::Foundation,
            &[
                "Build a RESTful API using Python/Node.js",
                "Create a simple web application with frontend and backend",
                "Develop a command-line tool for automation",
            ],
            &["Programming Fundamentals", "Web Development"],
        )
        .with_phase(
            Phase::Advanced,
            &[
                "Build a microservices architecture",
                "Create a real-time chat application",
                "Develop a mobile app with React Native",
            ],
            &["Software Architecture", "System Design"],
        )
        .with_phase(
            Phase::Specialization,
            &[
                "Build a cloud-native application with Kubernetes",
                "Develop a serverless application using AWS Lambda",
                "Create a CI/CD pipeline with GitHub Actions",
            ],
            &["AWS Solutions Architect", "Google Cloud Professional"],
        ),
        CareerTrack::new(
            "DevOps Engineer",
            &["linux", "docker", "kubernetes", "ci/cd", "cloud platforms"],
            &["gitops", "observability", "platform engineering", "security", "aiops"],
            88,
            95,
            40.0,
        )
        .with_phase(
            Phase::Foundation,
            &[
                "Containerize a multi-service application with Docker Compose",
                "Automate server provisioning with shell scripts",
                "Set up a CI pipeline that runs tests on every commit",
            ],
            &["Linux Foundation Certified SysAdmin", "Docker Certified Associate"],
        )
        .with_phase(
            Phase::Advanced,
            &[
                "Deploy an application to a managed Kubernetes cluster",
                "Provision cloud infrastructure with Terraform",
                "Build a blue-green deployment workflow",
            ],
            &["Certified Kubernetes Administrator", "AWS DevOps Engineer"],
        )
        .with_phase(
            Phase::Specialization,
            &[
                "Implement GitOps delivery with Argo CD",
                "Build an observability stack with Prometheus and Grafana",
                "Design an internal developer platform",
            ],
            &["Certified Kubernetes Security Specialist", "HashiCorp Terraform Associate"],
        ),
        CareerTrack::new(
            "Product Manager",
            &["product strategy", "user research", "data analysis", "stakeholder management", "agile"],
            &["ai product management", "data-driven decisions", "customer success", "growth hacking"],
            85,
            88,
            20.0,
        )
        .with_phase(
            Phase::Foundation,
            &[
                "Write a product requirements document for a real app",
                "Run five user interviews and synthesize the findings",
                "Build a product roadmap for a side project",
            ],
            &["Certified Scrum Product Owner", "Product Management Fundamentals"],
        )
        .with_phase(
            Phase::Advanced,
            &[
                "Define and track KPIs for a product launch",
                "Design and analyze an A/B test",
                "Lead a cross-functional sprint planning exercise",
            ],
            &["Pragmatic Institute PMC", "Product Analytics Certification"],
        )
        .with_phase(
            Phase::Specialization,
            &[
                "Scope an AI-powered feature end to end",
                "Build a growth experiment backlog",
                "Create a customer success playbook",
            ],
            &["AI Product Management Certification", "Growth Product Manager"],
        ),
        CareerTrack::new(
            "Cybersecurity Analyst",
            &["network security", "threat analysis", "incident response", "compliance", "penetration testing"],
            &["zero trust", "cloud security", "ai security", "threat intelligence", "devsecops"],
            92,
            96,
            45.0,
        )
        .with_phase(
            Phase::Foundation,
            &[
                "Set up a home lab with a firewall and IDS",
                "Analyze packet captures with Wireshark",
                "Harden a Linux server against common attacks",
            ],
            &["CompTIA Security+", "CompTIA Network+"],
        )
        .with_phase(
            Phase::Advanced,
            &[
                "Complete a capture-the-flag penetration testing challenge",
                "Write an incident response runbook",
                "Map controls for a compliance framework",
            ],
            &["Certified Ethical Hacker", "GIAC Certified Incident Handler"],
        )
        .with_phase(
            Phase::Specialization,
            &[
                "Design a zero trust network architecture",
                "Build a threat intelligence feed aggregator",
                "Add security scanning to a CI/CD pipeline",
            ],
            &["CISSP", "Certified Cloud Security Professional"],
        ),
        CareerTrack::new(
            "UX/UI Designer",
            &["user research", "wireframing", "prototyping", "design systems", "user testing"],
            &["ai-powered design", "voice ui", "ar/vr design", "accessibility", "design ops"],
            82,
            85,
            18.0,
        )
        .with_phase(
            Phase::Foundation,
            &[
                "Redesign the onboarding flow of an existing app",
                "Create wireframes for a mobile banking app",
                "Run a usability test with five participants",
            ],
            &["Google UX Design Certificate", "Interaction Design Foundation Basics"],
        )
        .with_phase(
            Phase::Advanced,
            &[
                "Build an interactive high-fidelity prototype",
                "Create a reusable design system in Figma",
                "Document a full case study from research to delivery",
            ],
            &["Nielsen Norman UX Certification", "Certified Usability Analyst"],
        )
        .with_phase(
            Phase::Specialization,
            &[
                "Design a voice interface for a home assistant",
                "Audit a website for WCAG accessibility",
                "Prototype an AR product preview experience",
            ],
            &["Certified Professional in Accessibility Core Competencies", "Design Ops Certification"],
        ),
        CareerTrack::new(
            "Cloud Architect",
            &["cloud platforms", "architecture design", "infrastructure", "networking", "security"],
            &["multi-cloud", "edge computing", "serverless", "cloud native", "finops"],
            90,
            94,
            32.0,
        )
        .with_phase(
            Phase::Foundation,
            &[
                "Deploy a three-tier web application in the cloud",
                "Design a virtual network with public and private subnets",
                "Set up identity and access management policies",
            ],
            &["AWS Cloud Practitioner", "Azure Fundamentals"],
        )
        .with_phase(
            Phase::Advanced,
            &[
                "Design a highly available multi-region architecture",
                "Write infrastructure as code for a full environment",
                "Plan a disaster recovery strategy",
            ],
            &["AWS Solutions Architect Associate", "Google Cloud Professional Architect"],
        )
        .with_phase(
            Phase::Specialization,
            &[
                "Build a multi-cloud deployment with a shared control plane",
                "Create a cost optimization report using FinOps practices",
                "Deploy a workload to edge locations",
            ],
            &["AWS Solutions Architect Professional", "FinOps Certified Practitioner"],
        ),
        CareerTrack::new(
            "AI/ML Engineer",
            &["machine learning", "deep learning", "python", "tensorflow", "pytorch"],
            &["genai", "llm", "mlops", "ai ethics", "federated learning"],
            96,
            99,
            50.0,
        )
        .with_phase(
            Phase::Foundation,
            &[
                "Implement basic ML algorithms from scratch",
                "Build a neural network using TensorFlow/PyTorch",
                "Create a computer vision application",
            ],
            &["Machine Learning Basics", "Python for AI"],
        )
        .with_phase(
            Phase::Advanced,
            &[
                "Develop a deep learning model for image classification",
                "Build a recommendation system using neural networks",
                "Create a natural language processing model",
            ],
            &["Deep Learning Specialization", "NLP Certification"],
        )
        .with_phase(
            Phase::Specialization,
            &[
                "Fine-tune a large language model for specific tasks",
                "Build a multimodal AI system",
                "Develop an AI ethics framework for your models",
            ],
            &["AI Ethics Certification", "MLOps Professional"],
        ),
    ]
}
