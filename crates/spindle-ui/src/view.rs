use crate::input::SpinnerPart;
use crate::semantics::Semantics;

pub type ViewId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    ArrowDropUp,
    ArrowDropDown,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewKind {
    Column,
    /// Root of a spinner. `invalid` asks the host to draw an error border.
    Spinner {
        enabled: bool,
        focused: bool,
        hovered: bool,
        invalid: bool,
    },
    Text {
        text: String,
        /// Widest text the display can show; hosts size the display for it
        /// so the layout does not jump as the value changes.
        width_hint: String,
        part: SpinnerPart,
    },
    Button {
        icon: Icon,
        enabled: bool,
        hovered: bool,
        pressed: bool,
        part: SpinnerPart,
    },
}

/// Description of what to draw; the host lays it out and paints it.
#[derive(Clone, Debug, PartialEq)]
pub struct View {
    pub id: ViewId,
    pub kind: ViewKind,
    pub children: Vec<View>,
    pub semantics: Option<Semantics>,
}

impl View {
    pub fn new(id: ViewId, kind: ViewKind) -> Self {
        View {
            id,
            kind,
            children: vec![],
            semantics: None,
        }
    }

    pub fn with_children(mut self, kids: Vec<View>) -> Self {
        self.children = kids;
        self
    }

    pub fn semantics(mut self, s: Semantics) -> Self {
        self.semantics = Some(s);
        self
    }

    /// Depth-first search for the node drawing `part`.
    pub fn find_part(&self, part: SpinnerPart) -> Option<&View> {
        let own = match &self.kind {
            ViewKind::Text { part: p, .. } | ViewKind::Button { part: p, .. } => Some(*p),
            _ => None,
        };
        if own == Some(part) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_part(part))
    }
}
