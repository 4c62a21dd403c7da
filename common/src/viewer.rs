//! ビューア（モーダル）のナビゲーション状態

/// 開いている日のメディアと現在位置
///
/// 開いている間 `items` は空にならず、`current_index` は常に有効
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerSelection {
    items: Vec<String>,
    current_index: usize,
    fullscreen: bool,
}

impl ViewerSelection {
    /// `start` の位置から開く（見つからなければ先頭）
    ///
    /// 空のリストは開かない（呼び出し側で空の日を拒否する前提）
    pub fn open(items: Vec<String>, start: &str) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        let current_index = items.iter().position(|f| f == start).unwrap_or(0);
        Some(Self {
            items,
            current_index,
            fullscreen: false,
        })
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// 表示中のファイル名
    pub fn current(&self) -> &str {
        &self.items[self.current_index]
    }

    /// 前後ボタンを出すか（1件のみなら不要）
    pub fn can_navigate(&self) -> bool {
        self.items.len() > 1
    }

    /// 次へ（末尾の次は先頭）
    pub fn next(&mut self) {
        if self.can_navigate() {
            self.current_index = (self.current_index + 1) % self.items.len();
        }
    }

    /// 前へ（先頭の前は末尾）
    pub fn previous(&mut self) {
        if self.can_navigate() {
            let len = self.items.len();
            self.current_index = (self.current_index + len - 1) % len;
        }
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
    }

    /// "2 / 5" 形式の位置表示
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.current_index + 1, self.items.len())
    }

    /// コマンドを適用する。閉じるべき場合は false
    pub fn apply(&mut self, command: ViewerCommand) -> bool {
        match command {
            ViewerCommand::Next => self.next(),
            ViewerCommand::Previous => self.previous(),
            ViewerCommand::ToggleFullscreen => self.toggle_fullscreen(),
            ViewerCommand::Close => return false,
        }
        true
    }
}

/// ビューア操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerCommand {
    Next,
    Previous,
    ToggleFullscreen,
    Close,
}

impl ViewerCommand {
    /// キーボードのキー名（`KeyboardEvent.key`）から変換
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" | " " => Some(ViewerCommand::Close),
            "ArrowLeft" => Some(ViewerCommand::Previous),
            "ArrowRight" => Some(ViewerCommand::Next),
            "f" | "F" => Some(ViewerCommand::ToggleFullscreen),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_open_at_start_and_wrap_forward() {
        let mut selection = ViewerSelection::open(items(&["a.jpg", "b.jpg", "c.jpg"]), "b.jpg").unwrap();
        assert_eq!(selection.current(), "b.jpg");

        selection.next();
        assert_eq!(selection.current(), "c.jpg");

        selection.next();
        assert_eq!(selection.current(), "a.jpg");
    }

    #[test]
    fn test_wrap_backward() {
        let mut selection = ViewerSelection::open(items(&["a.jpg", "b.jpg", "c.jpg"]), "a.jpg").unwrap();
        selection.previous();
        assert_eq!(selection.current(), "c.jpg");
        assert_eq!(selection.position_label(), "3 / 3");
    }

    #[test]
    fn test_unknown_start_defaults_to_first() {
        let selection = ViewerSelection::open(items(&["a.jpg", "b.jpg"]), "zzz.jpg").unwrap();
        assert_eq!(selection.current_index(), 0);
    }

    #[test]
    fn test_single_item_does_not_move() {
        let mut selection = ViewerSelection::open(items(&["only.jpg"]), "only.jpg").unwrap();
        assert!(!selection.can_navigate());
        selection.next();
        selection.previous();
        assert_eq!(selection.current_index(), 0);
    }

    #[test]
    fn test_empty_is_refused() {
        assert!(ViewerSelection::open(Vec::new(), "a.jpg").is_none());
    }

    #[test]
    fn test_from_key() {
        assert_eq!(ViewerCommand::from_key("Escape"), Some(ViewerCommand::Close));
        assert_eq!(ViewerCommand::from_key(" "), Some(ViewerCommand::Close));
        assert_eq!(ViewerCommand::from_key("ArrowLeft"), Some(ViewerCommand::Previous));
        assert_eq!(ViewerCommand::from_key("ArrowRight"), Some(ViewerCommand::Next));
        assert_eq!(ViewerCommand::from_key("F"), Some(ViewerCommand::ToggleFullscreen));
        assert_eq!(ViewerCommand::from_key("Enter"), None);
    }

    #[test]
    fn test_apply_commands() {
        let mut selection = ViewerSelection::open(items(&["a.jpg", "b.jpg"]), "a.jpg").unwrap();
        assert!(selection.apply(ViewerCommand::Next));
        assert_eq!(selection.current(), "b.jpg");
        assert!(selection.apply(ViewerCommand::ToggleFullscreen));
        assert!(selection.is_fullscreen());
        assert!(!selection.apply(ViewerCommand::Close));
    }
}
