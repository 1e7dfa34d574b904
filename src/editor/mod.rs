mod editor;

pub use editor::{BoundaryEditor, EditorSession};
