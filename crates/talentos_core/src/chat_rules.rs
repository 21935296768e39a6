//! crates/talentos_core/src/chat_rules.rs
//!
//! The ordered keyword table behind chat classification. Order is the
//! precedence contract: the first entry with a matching keyword wins, so
//! broad keywords such as "ai" sit below the more specific entries.

use crate::domain::{
    AI_ASSISTED_DEVELOPER, AI_ML_ENGINEER, CLOUD_RUN_DEVELOPER, GEMINI_AI_DEVELOPER,
    PRODUCT_MANAGER, QA_ENGINEER, SOFTWARE_ENGINEER,
};

/// A static `CareerOption`: (title, description, track).
pub type OptionEntry = (&'static str, &'static str, &'static str);

pub struct ChatRule {
    pub keywords: &'static [&'static str],
    pub career_path: &'static str,
    pub response: &'static str,
    pub options: [OptionEntry; 4],
}

pub const DEFAULT_RESPONSE: &str = "That's interesting! Based on what you've shared, I can help you explore several career paths that align with your interests:\n\n💼 Software Engineer - Build scalable applications\n🎨 Product Designer - Create user experiences\n📊 Product Manager - Define product strategy\n🤖 AI/ML Engineer - Work with cutting-edge AI\n\nWould you like me to generate a personalized learning roadmap for any of these paths?";

pub const DEFAULT_OPTIONS: [OptionEntry; 4] = [
    ("Software Engineer", "Build scalable applications", SOFTWARE_ENGINEER),
    ("Product Designer", "Create user experiences", PRODUCT_MANAGER),
    ("Product Manager", "Define product strategy", PRODUCT_MANAGER),
    ("AI/ML Engineer", "Work with cutting-edge AI", AI_ML_ENGINEER),
];

pub static CHAT_RULES: &[ChatRule] = &[
    ChatRule {
        keywords: &["vibe", "vibe coding", "v0", "ai coding", "cursor", "copilot"],
        career_path: AI_ASSISTED_DEVELOPER,
        response: "Exciting! AI-powered coding tools like Vibe are revolutionizing development:\n\n🤖 **AI-Assisted Developer** - Use AI tools to build faster\n⚡ **Full Stack with AI** - Leverage Cursor, GitHub Copilot, and v0\n🎨 **Frontend with AI Tools** - Build UIs rapidly with Vibe-style tools\n💡 **Product Engineer** - Ship products quickly using AI assistance\n\nAI coding tools are transforming how we build software. You'll learn traditional coding fundamentals while mastering these cutting-edge tools. Ready for your personalized learning path?",
        options: [
            ("AI-Assisted Developer", "Use AI tools to build faster", AI_ASSISTED_DEVELOPER),
            ("Full Stack with AI", "Leverage Cursor, GitHub Copilot, and v0", AI_ASSISTED_DEVELOPER),
            ("Frontend with AI Tools", "Build UIs rapidly with Vibe-style tools", AI_ASSISTED_DEVELOPER),
            ("Product Engineer", "Ship products quickly using AI assistance", AI_ASSISTED_DEVELOPER),
        ],
    },
    ChatRule {
        keywords: &["cloud run", "cloudrun", "serverless", "google cloud", "gcp"],
        career_path: CLOUD_RUN_DEVELOPER,
        response: "Great choice! Cloud Run and serverless are the future of deployment:\n\n☁️ **Cloud Engineer** - Master GCP services like Cloud Run\n🚀 **DevOps Engineer** - Deploy and scale serverless applications\n⚙️ **Backend Developer** - Build APIs with Cloud Run and serverless\n🏗️ **Solutions Architect** - Design cloud-native architectures\n\nCloud Run expertise is highly valuable for building scalable, cost-effective applications. You'll learn containerization, cloud deployment, and modern DevOps practices. Shall I create your cloud learning roadmap?",
        options: [
            ("Cloud Engineer", "Master GCP services like Cloud Run", CLOUD_RUN_DEVELOPER),
            ("DevOps Engineer", "Deploy and scale serverless applications", CLOUD_RUN_DEVELOPER),
            ("Backend Developer", "Build APIs with Cloud Run and serverless", CLOUD_RUN_DEVELOPER),
            ("Solutions Architect", "Design cloud-native architectures", CLOUD_RUN_DEVELOPER),
        ],
    },
    ChatRule {
        keywords: &["gemini", "gemini cli", "gemini api", "google ai", "vertex ai"],
        career_path: GEMINI_AI_DEVELOPER,
        response: "Fantastic! Gemini and Google AI are at the cutting edge:\n\n🤖 **AI Application Developer** - Build apps with Gemini API\n💬 **LLM Engineer** - Integrate large language models\n🔧 **AI Solutions Engineer** - Create AI-powered products\n📊 **ML Engineer** - Work with Vertex AI and Gemini\n\nGemini expertise positions you perfectly for the AI revolution. You'll learn prompt engineering, API integration, and building intelligent applications. Want to see your AI development roadmap?",
        options: [
            ("AI Application Developer", "Build apps with Gemini API", GEMINI_AI_DEVELOPER),
            ("LLM Engineer", "Integrate large language models", GEMINI_AI_DEVELOPER),
            ("AI Solutions Engineer", "Create AI-powered products", GEMINI_AI_DEVELOPER),
            ("ML Engineer", "Work with Vertex AI and Gemini", AI_ML_ENGINEER),
        ],
    },
    ChatRule {
        keywords: &["supabase", "firebase", "backend as a service", "baas"],
        career_path: SOFTWARE_ENGINEER,
        response: "Smart choice! Backend-as-a-Service platforms are game-changers:\n\n⚡ **Full Stack Developer** - Build complete apps with Supabase/Firebase\n🔐 **Backend Developer** - Master authentication and databases\n📱 **Mobile Developer** - Create apps with cloud backends\n🚀 **Indie Developer** - Ship products rapidly without managing servers\n\nSupabase/Firebase let you focus on building features instead of infrastructure. You'll learn database design, authentication, real-time features, and rapid development. Ready for your roadmap?",
        options: [
            ("Full Stack Developer", "Build complete apps with Supabase/Firebase", SOFTWARE_ENGINEER),
            ("Backend Developer", "Master authentication and databases", SOFTWARE_ENGINEER),
            ("Mobile Developer", "Create apps with cloud backends", SOFTWARE_ENGINEER),
            ("Indie Developer", "Ship products rapidly without managing servers", SOFTWARE_ENGINEER),
        ],
    },
    ChatRule {
        keywords: &["nextjs", "next.js", "react", "vercel", "remix"],
        career_path: SOFTWARE_ENGINEER,
        response: "Excellent! Modern React frameworks are in huge demand:\n\n⚛️ **React Developer** - Master Next.js and modern React patterns\n🎨 **Frontend Engineer** - Build performant web applications\n🔄 **Full Stack Developer** - Use Next.js API routes and server components\n🚀 **Web Developer** - Deploy to Vercel and Edge networks\n\nNext.js is used by top companies worldwide. You'll learn server-side rendering, static generation, API routes, and modern web development. Interested in your learning path?",
        options: [
            ("React Developer", "Master Next.js and modern React patterns", SOFTWARE_ENGINEER),
            ("Frontend Engineer", "Build performant web applications", SOFTWARE_ENGINEER),
            ("Full Stack Developer", "Use Next.js API routes and server components", SOFTWARE_ENGINEER),
            ("Web Developer", "Deploy to Vercel and Edge networks", SOFTWARE_ENGINEER),
        ],
    },
    ChatRule {
        keywords: &["typescript", "ts", "javascript", "js"],
        career_path: SOFTWARE_ENGINEER,
        response: "Perfect foundation! TypeScript/JavaScript powers the modern web:\n\n💻 **Frontend Developer** - Build UIs with TypeScript and React\n🔧 **Full Stack Developer** - Use TypeScript across the stack\n📱 **Mobile Developer** - Create React Native apps with TypeScript\n⚙️ **Backend Developer** - Build Node.js APIs with TypeScript\n\nTypeScript is essential for professional development. You'll learn type safety, modern JavaScript, and industry-standard practices. Want your personalized roadmap?",
        options: [
            ("Frontend Developer", "Build UIs with TypeScript and React", SOFTWARE_ENGINEER),
            ("Full Stack Developer", "Use TypeScript across the stack", SOFTWARE_ENGINEER),
            ("Mobile Developer", "Create React Native apps with TypeScript", SOFTWARE_ENGINEER),
            ("Backend Developer", "Build Node.js APIs with TypeScript", SOFTWARE_ENGINEER),
        ],
    },
    ChatRule {
        keywords: &["docker", "kubernetes", "k8s", "containers", "containerization"],
        career_path: SOFTWARE_ENGINEER,
        response: "Awesome! Container orchestration is critical for modern infrastructure:\n\n🐳 **DevOps Engineer** - Deploy and manage containerized apps\n☁️ **Cloud Native Engineer** - Build Kubernetes-based systems\n🏗️ **Platform Engineer** - Create developer platforms with K8s\n🔧 **Site Reliability Engineer** - Ensure system reliability at scale\n\nDocker and Kubernetes are industry standards for deployment. You'll learn containerization, orchestration, and cloud-native architecture. Ready for your roadmap?",
        options: [
            ("DevOps Engineer", "Deploy and manage containerized apps", SOFTWARE_ENGINEER),
            ("Cloud Native Engineer", "Build Kubernetes-based systems", SOFTWARE_ENGINEER),
            ("Platform Engineer", "Create developer platforms with K8s", SOFTWARE_ENGINEER),
            ("Site Reliability Engineer", "Ensure system reliability at scale", SOFTWARE_ENGINEER),
        ],
    },
    ChatRule {
        keywords: &["tailwind", "css", "styling", "design system", "shadcn"],
        career_path: SOFTWARE_ENGINEER,
        response: "Great eye for design! Modern CSS frameworks are essential:\n\n🎨 **Frontend Developer** - Master Tailwind and component libraries\n✨ **UI Engineer** - Build design systems with Tailwind\n🎯 **Product Designer** - Implement designs with modern CSS\n⚡ **Full Stack Developer** - Style complete applications efficiently\n\nTailwind CSS is the go-to for rapid, maintainable styling. You'll learn utility-first CSS, responsive design, and component architecture. Interested in your learning path?",
        options: [
            ("Frontend Developer", "Master Tailwind and component libraries", SOFTWARE_ENGINEER),
            ("UI Engineer", "Build design systems with Tailwind", SOFTWARE_ENGINEER),
            ("Product Designer", "Implement designs with modern CSS", PRODUCT_MANAGER),
            ("Full Stack Developer", "Style complete applications efficiently", SOFTWARE_ENGINEER),
        ],
    },
    ChatRule {
        keywords: &["fastapi", "python api", "flask", "django", "python backend"],
        career_path: SOFTWARE_ENGINEER,
        response: "Excellent choice! Python backends are powerful and popular:\n\n🐍 **Backend Developer** - Build APIs with FastAPI/Django\n🤖 **ML Engineer** - Create ML-powered APIs\n📊 **Data Engineer** - Build data pipelines and APIs\n⚡ **API Developer** - Design RESTful and GraphQL APIs\n\nPython backends combine simplicity with power. You'll learn API design, database integration, authentication, and deployment. Shall I create your roadmap?",
        options: [
            ("Backend Developer", "Build APIs with FastAPI/Django", SOFTWARE_ENGINEER),
            ("ML Engineer", "Create ML-powered APIs", AI_ML_ENGINEER),
            ("Data Engineer", "Build data pipelines and APIs", SOFTWARE_ENGINEER),
            ("API Developer", "Design RESTful and GraphQL APIs", SOFTWARE_ENGINEER),
        ],
    },
    ChatRule {
        keywords: &["postgres", "postgresql", "database", "sql", "mysql", "mongodb"],
        career_path: SOFTWARE_ENGINEER,
        response: "Smart focus! Database expertise is always in demand:\n\n🗄️ **Database Engineer** - Design and optimize databases\n📊 **Backend Developer** - Build data-driven applications\n🔍 **Data Engineer** - Create data infrastructure\n⚙️ **Full Stack Developer** - Master the complete stack\n\nDatabase skills are fundamental to most applications. You'll learn schema design, queries, optimization, and scaling. Want your personalized roadmap?",
        options: [
            ("Database Engineer", "Design and optimize databases", SOFTWARE_ENGINEER),
            ("Backend Developer", "Build data-driven applications", SOFTWARE_ENGINEER),
            ("Data Engineer", "Create data infrastructure", SOFTWARE_ENGINEER),
            ("Full Stack Developer", "Master the complete stack", SOFTWARE_ENGINEER),
        ],
    },
    ChatRule {
        keywords: &["graphql", "rest api", "api design", "api development"],
        career_path: SOFTWARE_ENGINEER,
        response: "Perfect! API design is a critical skill:\n\n🔌 **API Developer** - Design robust APIs with GraphQL/REST\n⚙️ **Backend Engineer** - Build scalable API services\n🌐 **Integration Engineer** - Connect systems and services\n💼 **Platform Engineer** - Create developer-friendly APIs\n\nAPI expertise enables you to build the backbone of modern applications. You'll learn API design patterns, authentication, versioning, and documentation. Ready for your roadmap?",
        options: [
            ("API Developer", "Design robust APIs with GraphQL/REST", SOFTWARE_ENGINEER),
            ("Backend Engineer", "Build scalable API services", SOFTWARE_ENGINEER),
            ("Integration Engineer", "Connect systems and services", SOFTWARE_ENGINEER),
            ("Platform Engineer", "Create developer-friendly APIs", SOFTWARE_ENGINEER),
        ],
    },
    ChatRule {
        keywords: &["terraform", "infrastructure as code", "iac", "ansible", "pulumi"],
        career_path: SOFTWARE_ENGINEER,
        response: "Excellent! Infrastructure as Code is essential for modern ops:\n\n🏗️ **Infrastructure Engineer** - Automate infrastructure with Terraform\n☁️ **Cloud Engineer** - Manage multi-cloud environments\n🔧 **DevOps Engineer** - Build reproducible infrastructure\n🛡️ **Platform Engineer** - Create self-service platforms\n\nIaC skills let you manage infrastructure like code. You'll learn Terraform, cloud platforms, automation, and best practices. Interested in your learning path?",
        options: [
            ("Infrastructure Engineer", "Automate infrastructure with Terraform", SOFTWARE_ENGINEER),
            ("Cloud Engineer", "Manage multi-cloud environments", SOFTWARE_ENGINEER),
            ("DevOps Engineer", "Build reproducible infrastructure", SOFTWARE_ENGINEER),
            ("Platform Engineer", "Create self-service platforms", SOFTWARE_ENGINEER),
        ],
    },
    ChatRule {
        keywords: &["github actions", "ci/cd", "jenkins", "gitlab", "continuous integration"],
        career_path: SOFTWARE_ENGINEER,
        response: "Great focus! CI/CD is crucial for modern development:\n\n🔄 **DevOps Engineer** - Build automated pipelines\n⚡ **Release Engineer** - Manage deployment workflows\n🛠️ **Platform Engineer** - Create developer tooling\n🚀 **Full Stack Developer** - Ship code continuously\n\nCI/CD automation speeds up development and reduces errors. You'll learn pipeline design, automated testing, and deployment strategies. Want your personalized roadmap?",
        options: [
            ("DevOps Engineer", "Build automated pipelines", SOFTWARE_ENGINEER),
            ("Release Engineer", "Manage deployment workflows", SOFTWARE_ENGINEER),
            ("Platform Engineer", "Create developer tooling", SOFTWARE_ENGINEER),
            ("Full Stack Developer", "Ship code continuously", SOFTWARE_ENGINEER),
        ],
    },
    ChatRule {
        keywords: &["software", "code", "coding", "developer", "programming", "build", "app", "engineer", "frontend", "backend", "fullstack", "web development"],
        career_path: SOFTWARE_ENGINEER,
        response: "Excellent choice! Software development is an incredibly rewarding field:\n\n💻 **Software Engineer** - Build scalable applications and systems\n🎨 **Frontend Developer** - Create beautiful user interfaces with React, Vue, or Angular\n⚙️ **Backend Developer** - Design robust APIs and server architecture\n🔄 **Full Stack Developer** - Master both frontend and backend technologies\n\nBased on your interest in coding, Software Engineering is a great path! You'll solve complex problems and build impactful products. Would you like me to create your personalized learning roadmap?",
        options: [
            ("Software Engineer", "Build scalable applications and systems", SOFTWARE_ENGINEER),
            ("Frontend Developer", "Create beautiful user interfaces", SOFTWARE_ENGINEER),
            ("Backend Developer", "Design robust APIs and server architecture", SOFTWARE_ENGINEER),
            ("Full Stack Developer", "Master both frontend and backend technologies", SOFTWARE_ENGINEER),
        ],
    },
    ChatRule {
        keywords: &["product manager", "product management", "pm role", "manage products", "product strategy", "roadmap", "feature", "stakeholder"],
        career_path: PRODUCT_MANAGER,
        response: "Great! Product Management is perfect for strategic thinkers:\n\n📊 **Product Manager** - Define product vision and strategy\n🚀 **Technical Product Manager** - Bridge technical and business needs\n📈 **Growth Product Manager** - Drive user acquisition and engagement\n🎯 **Platform Product Manager** - Build scalable product platforms\n\nAs a Product Manager, you'll work cross-functionally with engineering, design, and business teams to bring products from idea to launch. Ready to see your custom learning path?",
        options: [
            ("Product Manager", "Define product vision and strategy", PRODUCT_MANAGER),
            ("Technical Product Manager", "Bridge technical and business needs", PRODUCT_MANAGER),
            ("Growth Product Manager", "Drive user acquisition and engagement", PRODUCT_MANAGER),
            ("Platform Product Manager", "Build scalable product platforms", PRODUCT_MANAGER),
        ],
    },
    ChatRule {
        keywords: &["qa", "quality", "testing", "test", "automation", "manual testing", "bug", "quality assurance", "sdet"],
        career_path: QA_ENGINEER,
        response: "Perfect! Quality Assurance is critical for great products:\n\n🔍 **QA Engineer** - Ensure product quality through systematic testing\n🤖 **Automation Engineer** - Build automated test frameworks\n🛠️ **SDET** - Software Development Engineer in Test\n📱 **Mobile QA Engineer** - Specialize in mobile app testing\n\nQA Engineers are essential team members who ensure excellent user experiences by catching issues before users do. Interested in your personalized roadmap?",
        options: [
            ("QA Engineer", "Ensure product quality through systematic testing", QA_ENGINEER),
            ("Automation Engineer", "Build automated test frameworks", QA_ENGINEER),
            ("SDET", "Software Development Engineer in Test", QA_ENGINEER),
            ("Mobile QA Engineer", "Specialize in mobile app testing", QA_ENGINEER),
        ],
    },
    ChatRule {
        keywords: &["ai", "machine learning", "ml", "artificial intelligence", "deep learning", "neural network", "data science", "nlp", "computer vision", "llm"],
        career_path: AI_ML_ENGINEER,
        response: "Fantastic! AI/ML is one of the most exciting fields right now:\n\n🤖 **AI/ML Engineer** - Build and deploy machine learning models\n🧠 **Deep Learning Engineer** - Work with neural networks and advanced architectures\n💬 **NLP Engineer** - Develop language understanding systems\n👁️ **Computer Vision Engineer** - Create image and video analysis systems\n\nAI Engineers are in extremely high demand and work on cutting-edge technology. Shall I generate your AI learning roadmap?",
        options: [
            ("AI/ML Engineer", "Build and deploy machine learning models", AI_ML_ENGINEER),
            ("Deep Learning Engineer", "Work with neural networks and advanced architectures", AI_ML_ENGINEER),
            ("NLP Engineer", "Develop language understanding systems", AI_ML_ENGINEER),
            ("Computer Vision Engineer", "Create image and video analysis systems", AI_ML_ENGINEER),
        ],
    },
    ChatRule {
        keywords: &["data", "analytics", "analyst", "business intelligence", "bi", "statistics", "insights", "metrics"],
        career_path: SOFTWARE_ENGINEER,
        response: "Excellent choice! Data roles are crucial for decision-making:\n\n📊 **Data Analyst** - Transform data into actionable insights\n📈 **Business Analyst** - Bridge business needs with data solutions\n🔮 **Data Scientist** - Build predictive models and ML solutions\n🏗️ **Data Engineer** - Design and maintain data infrastructure\n\nData professionals help organizations make informed decisions using analytics and insights. Want to see your personalized learning path?",
        options: [
            ("Data Analyst", "Transform data into actionable insights", SOFTWARE_ENGINEER),
            ("Business Analyst", "Bridge business needs with data solutions", SOFTWARE_ENGINEER),
            ("Data Scientist", "Build predictive models and ML solutions", AI_ML_ENGINEER),
            ("Data Engineer", "Design and maintain data infrastructure", SOFTWARE_ENGINEER),
        ],
    },
    ChatRule {
        keywords: &["design", "ui", "ux", "user experience", "designer", "product design", "visual", "figma", "interface", "creative"],
        career_path: PRODUCT_MANAGER,
        response: "Wonderful! Design is perfect for creative problem-solvers:\n\n🎨 **Product Designer** - Create end-to-end user experiences\n✨ **UI Designer** - Craft beautiful visual interfaces\n🔍 **UX Researcher** - Understand user needs through research\n🎯 **Interaction Designer** - Design engaging user interactions\n\nDesigners combine creativity with empathy to build delightful products that users love. Ready for your custom design learning roadmap?",
        options: [
            ("Product Designer", "Create end-to-end user experiences", PRODUCT_MANAGER),
            ("UI Designer", "Craft beautiful visual interfaces", PRODUCT_MANAGER),
            ("UX Researcher", "Understand user needs through research", PRODUCT_MANAGER),
            ("Interaction Designer", "Design engaging user interactions", PRODUCT_MANAGER),
        ],
    },
    ChatRule {
        keywords: &["devops", "cloud", "infrastructure", "aws", "azure", "deployment", "sre", "site reliability"],
        career_path: SOFTWARE_ENGINEER,
        response: "Great choice! DevOps/Cloud is essential for modern software:\n\n☁️ **Cloud Engineer** - Build and manage cloud infrastructure\n🔧 **DevOps Engineer** - Automate deployment and operations\n🛡️ **Site Reliability Engineer** - Ensure system reliability and performance\n🏗️ **Infrastructure Engineer** - Design scalable infrastructure\n\nDevOps professionals enable fast, reliable software delivery. Interested in your learning path?",
        options: [
            ("Cloud Engineer", "Build and manage cloud infrastructure", SOFTWARE_ENGINEER),
            ("DevOps Engineer", "Automate deployment and operations", SOFTWARE_ENGINEER),
            ("Site Reliability Engineer", "Ensure system reliability and performance", SOFTWARE_ENGINEER),
            ("Infrastructure Engineer", "Design scalable infrastructure", SOFTWARE_ENGINEER),
        ],
    },
    ChatRule {
        keywords: &["security", "cybersecurity", "infosec", "penetration", "ethical hacking", "security engineer", "appsec"],
        career_path: SOFTWARE_ENGINEER,
        response: "Excellent! Cybersecurity is critical in today's digital world:\n\n🔒 **Security Engineer** - Protect systems and applications\n🕵️ **Penetration Tester** - Find vulnerabilities through ethical hacking\n🛡️ **Application Security Engineer** - Secure software development lifecycle\n🚨 **Security Analyst** - Monitor and respond to security threats\n\nSecurity professionals are highly valued for protecting organizations from cyber threats. Want your personalized roadmap?",
        options: [
            ("Security Engineer", "Protect systems and applications", SOFTWARE_ENGINEER),
            ("Penetration Tester", "Find vulnerabilities through ethical hacking", SOFTWARE_ENGINEER),
            ("Application Security Engineer", "Secure software development lifecycle", SOFTWARE_ENGINEER),
            ("Security Analyst", "Monitor and respond to security threats", SOFTWARE_ENGINEER),
        ],
    },
    ChatRule {
        keywords: &["mobile", "ios", "android", "react native", "flutter", "app development", "mobile development"],
        career_path: SOFTWARE_ENGINEER,
        response: "Perfect! Mobile development is incredibly dynamic:\n\n📱 **iOS Developer** - Build native iPhone/iPad apps with Swift\n🤖 **Android Developer** - Create Android apps with Kotlin\n🔄 **React Native Developer** - Cross-platform development with JavaScript\n🎯 **Flutter Developer** - Build beautiful cross-platform apps\n\nMobile developers create apps used by billions worldwide. Ready to see your learning path?",
        options: [
            ("iOS Developer", "Build native iPhone/iPad apps with Swift", SOFTWARE_ENGINEER),
            ("Android Developer", "Create Android apps with Kotlin", SOFTWARE_ENGINEER),
            ("React Native Developer", "Cross-platform development with JavaScript", SOFTWARE_ENGINEER),
            ("Flutter Developer", "Build beautiful cross-platform apps", SOFTWARE_ENGINEER),
        ],
    },
    ChatRule {
        keywords: &["blockchain", "web3", "crypto", "smart contract", "solidity", "ethereum", "defi"],
        career_path: SOFTWARE_ENGINEER,
        response: "Exciting choice! Web3/Blockchain is the future of internet:\n\n⛓️ **Blockchain Developer** - Build decentralized applications\n📝 **Smart Contract Developer** - Write secure blockchain contracts\n💰 **DeFi Engineer** - Create decentralized finance solutions\n🌐 **Web3 Engineer** - Build next-generation internet applications\n\nWeb3 developers work on cutting-edge decentralized technology. Interested in your roadmap?",
        options: [
            ("Blockchain Developer", "Build decentralized applications", SOFTWARE_ENGINEER),
            ("Smart Contract Developer", "Write secure blockchain contracts", SOFTWARE_ENGINEER),
            ("DeFi Engineer", "Create decentralized finance solutions", SOFTWARE_ENGINEER),
            ("Web3 Engineer", "Build next-generation internet applications", SOFTWARE_ENGINEER),
        ],
    },
];
