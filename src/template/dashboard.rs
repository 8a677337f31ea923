//! The dashboard shell both fronts share, filled with mock data.

use askama::Template;

use crate::flow::notify::Toast;

pub struct Metric {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub trend: &'static str,
    pub icon: &'static str,
}

pub struct RecentAlert {
    pub query: &'static str,
    pub status: &'static str,
    pub time: &'static str,
    pub result: &'static str,
}

pub struct Connection {
    pub name: &'static str,
    pub status: &'static str,
    pub queries: u32,
    pub last_check: &'static str,
}

impl Connection {
    pub fn status_label(&self) -> &'static str {
        if self.status == "healthy" {
            "Saudável"
        } else {
            "Atenção"
        }
    }
}

pub struct MenuItem {
    pub icon: &'static str,
    pub label: &'static str,
}

const METRICS: [Metric; 4] = [
    Metric {
        title: "Queries Ativas",
        value: "12",
        change: "+2",
        trend: "up",
        icon: "file-text",
    },
    Metric {
        title: "Alertas Configurados",
        value: "8",
        change: "+1",
        trend: "up",
        icon: "bell",
    },
    Metric {
        title: "Conexões Ativas",
        value: "3",
        change: "0",
        trend: "stable",
        icon: "database",
    },
    Metric {
        title: "Alertas Disparados (24h)",
        value: "5",
        change: "-3",
        trend: "down",
        icon: "alert-circle",
    },
];

const RECENT_ALERTS: [RecentAlert; 3] = [
    RecentAlert {
        query: "Pedidos com Valores Negativos",
        status: "critical",
        time: "há 5 min",
        result: "3 registros encontrados",
    },
    RecentAlert {
        query: "Usuários Inativos (7 dias)",
        status: "warning",
        time: "há 2 horas",
        result: "45 usuários",
    },
    RecentAlert {
        query: "Transações Pendentes",
        status: "resolved",
        time: "há 4 horas",
        result: "Resolvido - 0 pendências",
    },
];

const CONNECTIONS: [Connection; 3] = [
    Connection {
        name: "Produção - SQL Server",
        status: "healthy",
        queries: 8,
        last_check: "há 2 min",
    },
    Connection {
        name: "Staging - Postgres",
        status: "healthy",
        queries: 3,
        last_check: "há 5 min",
    },
    Connection {
        name: "Analytics - MySQL",
        status: "warning",
        queries: 1,
        last_check: "há 15 min",
    },
];

const MENU_ITEMS: [MenuItem; 5] = [
    MenuItem {
        icon: "bar-chart",
        label: "Dashboard",
    },
    MenuItem {
        icon: "database",
        label: "Conexões",
    },
    MenuItem {
        icon: "file-text",
        label: "Queries",
    },
    MenuItem {
        icon: "bell",
        label: "Alertas",
    },
    MenuItem {
        icon: "settings",
        label: "Configurações",
    },
];

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub toasts: Vec<Toast>,
    pub exit_path: &'static str,
    pub metrics: &'static [Metric],
    pub recent_alerts: &'static [RecentAlert],
    pub connections: &'static [Connection],
    pub menu_items: &'static [MenuItem],
}

impl DashboardTemplate {
    pub fn beacon(toasts: Vec<Toast>) -> DashboardTemplate {
        DashboardTemplate::with_exit("/auth", toasts)
    }

    pub fn tbd(toasts: Vec<Toast>) -> DashboardTemplate {
        DashboardTemplate::with_exit("/login", toasts)
    }

    fn with_exit(exit_path: &'static str, toasts: Vec<Toast>) -> DashboardTemplate {
        DashboardTemplate {
            toasts,
            exit_path,
            metrics: &METRICS,
            recent_alerts: &RECENT_ALERTS,
            connections: &CONNECTIONS,
            menu_items: &MENU_ITEMS,
        }
    }
}
