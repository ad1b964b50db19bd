//! Launcher items and the collection changes that move them.

/// What a renderer needs from an item: an icon to draw and a command to run
/// when it is tapped.
///
/// The grid itself only needs equality to find an item's cell; this trait is
/// the launcher-side capability layered on top.
pub trait LauncherItem {
    /// Icon resource name.
    fn icon(&self) -> &str;

    /// Run the item's command.
    fn invoke(&self);
}

impl<T: LauncherItem + ?Sized> LauncherItem for std::rc::Rc<T> {
    fn icon(&self) -> &str {
        (**self).icon()
    }

    fn invoke(&self) {
        (**self).invoke()
    }
}

impl<T: LauncherItem + ?Sized> LauncherItem for std::sync::Arc<T> {
    fn icon(&self) -> &str {
        (**self).icon()
    }

    fn invoke(&self) {
        (**self).invoke()
    }
}

/// A change reported by the collection backing the launcher.
#[derive(Debug, Clone, PartialEq)]
pub enum CollectionChange<T> {
    /// Items appended to the collection
    Added(Vec<T>),
    /// Items removed from the collection
    Removed(Vec<T>),
    /// Items reordered; layout is unaffected
    Moved,
    /// Items replaced in place; layout is unaffected
    Replaced,
    /// The collection was reset to the given contents
    Reset(Vec<T>),
}

impl<T> CollectionChange<T> {
    /// Short name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            CollectionChange::Added(_) => "added",
            CollectionChange::Removed(_) => "removed",
            CollectionChange::Moved => "moved",
            CollectionChange::Replaced => "replaced",
            CollectionChange::Reset(_) => "reset",
        }
    }
}
