// In-memory catalog with the showcase data the dashboard displays
use crate::application::catalog_repository::CatalogRepository;
use crate::domain::company::Company;
use crate::domain::member::{Member, SocialLinks};
use crate::domain::project::{Project, ProjectCategory, ProjectStatus};
use crate::domain::report::MonthlyReport;
use chrono::NaiveDate;

/// Fixed at start-up and never mutated.
#[derive(Debug, Clone)]
pub struct MockCatalog {
    projects: Vec<Project>,
    companies: Vec<Company>,
    members: Vec<Member>,
    monthly_reports: Vec<MonthlyReport>,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self {
            projects: projects(),
            companies: companies(),
            members: members(),
            monthly_reports: monthly_reports(),
        }
    }
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogRepository for MockCatalog {
    fn projects(&self) -> &[Project] {
        &self.projects
    }

    fn companies(&self) -> &[Company] {
        &self.companies
    }

    fn members(&self) -> &[Member] {
        &self.members
    }

    fn monthly_reports(&self) -> &[MonthlyReport] {
        &self.monthly_reports
    }
}

/// Out-of-range literals fall back to `NaiveDate::MIN`; the catalog tests
/// reject that value so a typo cannot ship.
fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

fn company(
    id: &str,
    name: &str,
    email: &str,
    phone: &str,
    website: Option<&str>,
    created_at: NaiveDate,
) -> Company {
    Company {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        website: website.map(str::to_string),
        created_at,
    }
}

fn companies() -> Vec<Company> {
    vec![
        company(
            "1",
            "Padaria Pão Quente",
            "contato@paoquente.com.br",
            "+55 13 3222-1010",
            Some("https://paoquente.com.br"),
            date(2023, 2, 10),
        ),
        company(
            "2",
            "Clínica Sorriso",
            "adm@clinicasorriso.com.br",
            "+55 11 3444-2020",
            Some("https://clinicasorriso.com.br"),
            date(2023, 4, 5),
        ),
        company(
            "3",
            "Auto Peças Veloz",
            "vendas@autopecasveloz.com.br",
            "+55 21 3555-3030",
            None,
            date(2023, 6, 18),
        ),
        company(
            "4",
            "Escola Aprender",
            "secretaria@escolaaprender.edu.br",
            "+55 31 3666-4040",
            Some("https://escolaaprender.edu.br"),
            date(2023, 9, 1),
        ),
        company(
            "5",
            "Studio Fit",
            "ola@studiofit.com.br",
            "+55 41 3777-5050",
            Some("https://studiofit.com.br"),
            date(2024, 1, 22),
        ),
        company(
            "6",
            "Imobiliária Horizonte",
            "contato@horizonteimoveis.com.br",
            "+55 51 3888-6060",
            None,
            date(2024, 5, 3),
        ),
    ]
}

struct ProjectRow {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    category: ProjectCategory,
    status: ProjectStatus,
    company_id: &'static str,
    monthly_revenue: f64,
    server_cost: f64,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    is_active: bool,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Project {
            id: row.id.to_string(),
            name: row.name.to_string(),
            description: row.description.to_string(),
            category: row.category,
            status: row.status,
            company_id: row.company_id.to_string(),
            monthly_revenue: row.monthly_revenue,
            server_cost: row.server_cost,
            start_date: row.start_date,
            end_date: row.end_date,
            is_active: row.is_active,
        }
    }
}

fn projects() -> Vec<Project> {
    use ProjectCategory as C;
    use ProjectStatus as S;

    let rows = vec![
        ProjectRow {
            id: "1",
            name: "Site Institucional Pão Quente",
            description: "Landing page com cardápio e encomendas via WhatsApp",
            category: C::LandingPage,
            status: S::Deployed,
            company_id: "1",
            monthly_revenue: 450.0,
            server_cost: 60.0,
            start_date: date(2023, 3, 1),
            end_date: Some(date(2023, 4, 15)),
            is_active: true,
        },
        ProjectRow {
            id: "2",
            name: "Agenda Online Sorriso",
            description: "Sistema de agendamento de consultas com lembretes",
            category: C::Crm,
            status: S::Maintenance,
            company_id: "2",
            monthly_revenue: 1800.0,
            server_cost: 320.0,
            start_date: date(2023, 5, 2),
            end_date: None,
            is_active: true,
        },
        ProjectRow {
            id: "3",
            name: "Catálogo de Peças",
            description: "Loja virtual com busca por modelo de veículo",
            category: C::ECommerce,
            status: S::Development,
            company_id: "3",
            monthly_revenue: 2500.0,
            server_cost: 540.0,
            start_date: date(2024, 2, 12),
            end_date: None,
            is_active: true,
        },
        ProjectRow {
            id: "4",
            name: "App Aprender",
            description: "Aplicativo para pais acompanharem notas e frequência",
            category: C::MobileApp,
            status: S::Testing,
            company_id: "4",
            monthly_revenue: 3200.0,
            server_cost: 780.0,
            start_date: date(2024, 3, 4),
            end_date: None,
            is_active: true,
        },
        ProjectRow {
            id: "5",
            name: "Painel de Vendas Pão Quente",
            description: "Dashboard de vendas diárias por loja",
            category: C::Dashboard,
            status: S::Planning,
            company_id: "1",
            monthly_revenue: 900.0,
            server_cost: 150.0,
            start_date: date(2024, 6, 10),
            end_date: None,
            is_active: true,
        },
        ProjectRow {
            id: "6",
            name: "Blog Sorriso",
            description: "Blog com dicas de saúde bucal",
            category: C::Blog,
            status: S::Deployed,
            company_id: "2",
            monthly_revenue: 300.0,
            server_cost: 40.0,
            start_date: date(2023, 8, 7),
            end_date: Some(date(2023, 9, 1)),
            is_active: true,
        },
        ProjectRow {
            id: "7",
            name: "Landing Page Studio Fit",
            description: "Página de captação para aulas experimentais",
            category: C::LandingPage,
            status: S::Deployed,
            company_id: "5",
            monthly_revenue: 400.0,
            server_cost: 50.0,
            start_date: date(2024, 2, 1),
            end_date: Some(date(2024, 2, 28)),
            is_active: true,
        },
        ProjectRow {
            id: "8",
            name: "CRM Veloz",
            description: "Gestão de clientes e orçamentos da loja",
            category: C::Crm,
            status: S::Paused,
            company_id: "3",
            monthly_revenue: 1200.0,
            server_cost: 260.0,
            start_date: date(2024, 4, 15),
            end_date: None,
            is_active: false,
        },
        ProjectRow {
            id: "9",
            name: "Portal do Aluno",
            description: "Área do aluno com materiais e boletins",
            category: C::Dashboard,
            status: S::Development,
            company_id: "4",
            monthly_revenue: 2100.0,
            server_cost: 430.0,
            start_date: date(2024, 7, 1),
            end_date: None,
            is_active: true,
        },
        ProjectRow {
            id: "10",
            name: "App Studio Fit",
            description: "Aplicativo de treinos e check-in",
            category: C::MobileApp,
            status: S::Cancelled,
            company_id: "5",
            monthly_revenue: 0.0,
            server_cost: 120.0,
            start_date: date(2024, 3, 20),
            end_date: Some(date(2024, 5, 30)),
            is_active: false,
        },
        ProjectRow {
            id: "11",
            name: "Portfólio Fotográfico",
            description: "Galeria de trabalhos para campanhas da academia",
            category: C::Portfolio,
            status: S::Testing,
            company_id: "5",
            monthly_revenue: 350.0,
            server_cost: 45.0,
            start_date: date(2024, 8, 5),
            end_date: None,
            is_active: true,
        },
    ];

    rows.into_iter().map(Project::from).collect()
}

#[allow(clippy::too_many_arguments)]
fn member(
    uuid: &str,
    name: &str,
    email: &str,
    phone: &str,
    position: &str,
    bio: &str,
    project_ids: &[&str],
    joined_at: NaiveDate,
    skills: &[&str],
    social: SocialLinks,
) -> Member {
    Member {
        uuid: uuid.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        photo: "/placeholder-user.jpg".to_string(),
        position: position.to_string(),
        bio: Some(bio.to_string()),
        project_ids: project_ids.iter().map(|id| id.to_string()).collect(),
        joined_at,
        skills: skills.iter().map(|s| s.to_string()).collect(),
        social,
    }
}

fn social(linkedin: &str, github: Option<&str>) -> SocialLinks {
    SocialLinks {
        linkedin: Some(format!("https://linkedin.com/in/{}", linkedin)),
        github: github.map(|g| format!("https://github.com/{}", g)),
        ..Default::default()
    }
}

fn members() -> Vec<Member> {
    vec![
        member(
            "550e8400-e29b-41d4-a716-446655440001",
            "Johnny Rabelo",
            "johnny@toastytech.com",
            "+55 13 99673-8213",
            "CEO & Full cycle Developer",
            "Fundador, apaixonado por criar soluções que transformam negócios. \
             Desenvolvimento web e mobile com foco em aplicações escaláveis.",
            &["1", "2", "4"],
            date(2023, 1, 15),
            &["React", "Next.js", "Node.js", "TypeScript", "Angular", "Microserviços", "Go"],
            social("johnnyfr26", Some("johnnyfr26")),
        ),
        member(
            "550e8400-e29b-41d4-a716-446655440002",
            "Ana Silva",
            "ana@toastytech.com",
            "+55 11 98765-4321",
            "Frontend Developer",
            "Interfaces modernas e responsivas, com foco em performance e acessibilidade.",
            &["1", "3", "5"],
            date(2023, 3, 20),
            &["React", "Vue.js", "CSS", "Tailwind", "Figma"],
            social("anasilva", Some("anasilva")),
        ),
        member(
            "550e8400-e29b-41d4-a716-446655440003",
            "Carlos Santos",
            "carlos@toastytech.com",
            "+55 21 97654-3210",
            "Backend Developer",
            "Arquitetura de sistemas e APIs escaláveis. Experiência em cloud e DevOps.",
            &["2", "4", "8"],
            date(2023, 5, 10),
            &["Node.js", "Python", "PostgreSQL", "AWS", "Docker", "Kubernetes"],
            social("carlossantos", Some("carlossantos")),
        ),
        member(
            "550e8400-e29b-41d4-a716-446655440004",
            "Juliana Costa",
            "juliana@toastytech.com",
            "+55 31 96543-2109",
            "UI/UX Designer",
            "Experiências digitais memoráveis, design systems e prototipagem.",
            &["1", "4", "5", "7"],
            date(2023, 7, 1),
            &["Figma", "Adobe XD", "Sketch", "Design Systems", "User Research"],
            social("julianacosta", None),
        ),
        member(
            "550e8400-e29b-41d4-a716-446655440005",
            "Pedro Oliveira",
            "pedro@toastytech.com",
            "+55 41 95432-1098",
            "Mobile Developer",
            "Apps performáticos com React Native e Flutter.",
            &["4"],
            date(2023, 9, 15),
            &["React Native", "Flutter", "iOS", "Android", "Firebase"],
            social("pedrooliveira", Some("pedrooliveira")),
        ),
        member(
            "550e8400-e29b-41d4-a716-446655440006",
            "Mariana Ferreira",
            "mariana@toastytech.com",
            "+55 51 94321-0987",
            "Project Manager",
            "Metodologias ágeis, coordenação de equipes e entrega de resultados.",
            &["2", "3", "8"],
            date(2023, 11, 1),
            &["Scrum", "Kanban", "Jira", "Gestão de Equipes", "Comunicação"],
            social("marianaferreira", None),
        ),
    ]
}

fn monthly_reports() -> Vec<MonthlyReport> {
    // (month, revenue, costs, active, new, completed)
    [
        ("2025-03", 9800.0, 2150.0, 8, 1, 0),
        ("2025-04", 10400.0, 2230.0, 8, 1, 1),
        ("2025-05", 11250.0, 2410.0, 9, 2, 1),
        ("2025-06", 11900.0, 2600.0, 9, 1, 1),
        ("2025-07", 12600.0, 2705.0, 9, 1, 1),
        ("2025-08", 13200.0, 2795.0, 9, 2, 2),
    ]
    .into_iter()
    .map(
        |(month, revenue, costs, active_projects, new_projects, completed_projects)| {
            MonthlyReport {
                month: month.to_string(),
                revenue,
                costs,
                profit: revenue - costs,
                active_projects,
                new_projects,
                completed_projects,
            }
        },
    )
    .collect()
}
