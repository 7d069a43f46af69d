/// Entry of the sidebar navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub id: &'static str,
    pub label: &'static str,
}

pub const MENU_ITEMS: [MenuItem; 9] = [
    MenuItem { id: "inicio", label: "Inicio" },
    MenuItem { id: "usuarios", label: "Usuarios" },
    MenuItem { id: "grupos", label: "Grupos" },
    MenuItem { id: "favoritos", label: "Favoritos" },
    MenuItem { id: "precios", label: "Precios" },
    MenuItem { id: "propiedades", label: "Propiedades" },
    MenuItem { id: "calendario", label: "Calendario" },
    MenuItem { id: "archivos", label: "Archivos" },
    MenuItem { id: "mapa", label: "Mapa" },
];

const DEFAULT_SECTION: &str = "propiedades";

/// Collapsed/expanded sidebar and the highlighted menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarState {
    expanded: bool,
    selected: &'static str,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self {
            expanded: false,
            selected: DEFAULT_SECTION,
        }
    }
}

impl SidebarState {
    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Highlight `id`; unknown ids are ignored
    pub fn select(&mut self, id: &str) -> bool {
        match MENU_ITEMS.iter().find(|item| item.id == id) {
            Some(item) => {
                self.selected = item.id;
                true
            }
            None => false,
        }
    }

    pub fn selected(&self) -> &'static str {
        self.selected
    }
}
