//! 検索モジュール
//!
//! カーソルを基準にした前方・後方検索。
//! 文書全体のマッチを集め、指定方向に絞り込んでカーソルに近い順に並べる

pub mod matcher;
pub mod ordering;
pub mod query;
mod state;
pub mod types;

use crate::buffer::Position;
use crate::config::FinderConfig;
use crate::editor::EditorHost;
use state::SearchState;

pub use matcher::{LiteralMatcher, StringMatcher};
pub use ordering::order_matches;
pub use query::{parse_prompt, ParsedQuery};
pub use types::{Instruction, SearchMatch, SearchMode, Suggestion};

/// マッチがない場合の表示
pub const NOTHING_FOUND: &str = "Nothing found.";

/// プロンプトの既定プレースホルダー
pub const DEFAULT_PLACEHOLDER: &str = "Search for something...";

/// プロンプト下部の操作説明
pub const INSTRUCTIONS: &[Instruction] = &[
    Instruction {
        command: "after:",
        purpose: "to find after cursor",
    },
    Instruction {
        command: "before:",
        purpose: "to find before cursor",
    },
    Instruction {
        command: "↑↓",
        purpose: "to navigate",
    },
    Instruction {
        command: "↵",
        purpose: "to jump to result",
    },
];

/// 検索語・方向・カーソル位置から、並べ替え済みのマッチを返す
pub fn get_matches<H: EditorHost>(
    host: &H,
    query: &str,
    mode: SearchMode,
    cursor: Position,
) -> Vec<SearchMatch> {
    find_ordered(&LiteralMatcher::new(), host, query, mode, cursor)
}

fn find_ordered<M: StringMatcher, H: EditorHost>(
    matcher: &M,
    host: &H,
    query: &str,
    mode: SearchMode,
    cursor: Position,
) -> Vec<SearchMatch> {
    if query.is_empty() {
        return Vec::new();
    }

    let lines = (0..host.line_count()).map(|index| host.line(index));
    let found = matcher.find_matches(lines, query);
    let found_count = found.len();
    let ordered = order_matches(found, cursor, mode);
    log::trace!(
        "query {:?} {:?} from {:?}: {} found, {} kept",
        query,
        mode,
        cursor,
        found_count,
        ordered.len()
    );
    ordered
}

/// 検索セッションの挙動設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// 候補数の上限
    pub max_results: Option<usize>,
    /// 選択時に検索語部分を選択状態にするか
    pub select_on_choose: bool,
    /// 入力が空のときのプレースホルダー
    pub placeholder: String,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            max_results: None,
            select_on_choose: true,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

impl From<&FinderConfig> for SessionOptions {
    fn from(config: &FinderConfig) -> Self {
        Self {
            max_results: config.max_results,
            select_on_choose: config.select_on_choose,
            placeholder: config.placeholder.clone(),
        }
    }
}

/// 検索セッション制御
///
/// キー入力ごとにマッチを再計算し、候補の選択とジャンプを扱う
#[derive(Debug)]
pub struct SearchSession<M: StringMatcher = LiteralMatcher> {
    matcher: M,
    state: SearchState,
    options: SessionOptions,
}

impl SearchSession<LiteralMatcher> {
    /// 既定のリテラルマッチャーで作成
    pub fn new() -> Self {
        Self::with_matcher(LiteralMatcher::new())
    }
}

impl Default for SearchSession<LiteralMatcher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: StringMatcher> SearchSession<M> {
    /// マッチャーを差し替えて作成
    pub fn with_matcher(matcher: M) -> Self {
        Self {
            matcher,
            state: SearchState::new(),
            options: SessionOptions::default(),
        }
    }

    /// 設定を差し替える
    pub fn with_options(mut self, options: SessionOptions) -> Self {
        self.options = options;
        self
    }

    /// 検索がアクティブか判定
    pub fn is_active(&self) -> bool {
        self.state.active
    }

    /// プロンプトの入力内容
    pub fn input(&self) -> &str {
        &self.state.input
    }

    /// 現在の検索語（接頭辞を除く）
    pub fn query(&self) -> &str {
        &self.state.query
    }

    /// 現在の方向
    pub fn mode(&self) -> SearchMode {
        self.state.mode
    }

    /// 検索開始時のカーソル位置
    pub fn origin(&self) -> Position {
        self.state.origin
    }

    /// 並べ替え済みのマッチ
    pub fn matches(&self) -> &[SearchMatch] {
        &self.state.matches
    }

    /// 選択中の候補番号
    pub fn selected_index(&self) -> Option<usize> {
        self.state.selected
    }

    /// 選択中のマッチ
    pub fn selected_match(&self) -> Option<&SearchMatch> {
        self.state.selected.and_then(|idx| self.state.matches.get(idx))
    }

    /// プレースホルダー
    pub fn placeholder(&self) -> &str {
        &self.options.placeholder
    }

    /// 操作説明
    pub fn instructions(&self) -> &'static [Instruction] {
        INSTRUCTIONS
    }

    /// 検索を開始（入力欄には既定方向の接頭辞が入る）
    pub fn open<H: EditorHost>(&mut self, host: &H, default_mode: SearchMode) {
        self.state.reset();
        self.state.active = true;
        self.state.default_mode = default_mode;
        self.state.mode = default_mode;
        self.state.origin = host.cursor();
        self.state.input = default_mode.prompt_prefix().to_string();
        log::debug!("search opened at {:?} ({:?})", self.state.origin, default_mode);
        self.refresh(host);
    }

    /// 文字を追加
    pub fn input_char<H: EditorHost>(&mut self, host: &H, ch: char) {
        if !self.state.active {
            return;
        }
        self.state.input.push(ch);
        self.refresh(host);
    }

    /// 入力を1文字削除
    pub fn delete_char<H: EditorHost>(&mut self, host: &H) {
        if !self.state.active {
            return;
        }
        self.state.input.pop();
        self.refresh(host);
    }

    /// 入力全体を置き換える
    pub fn set_input<H: EditorHost>(&mut self, host: &H, input: &str) {
        if !self.state.active {
            return;
        }
        self.state.input = input.to_string();
        self.refresh(host);
    }

    /// 入力からマッチを再計算
    pub fn refresh<H: EditorHost>(&mut self, host: &H) {
        let parsed = parse_prompt(&self.state.input, self.state.default_mode);
        self.state.mode = parsed.mode;
        self.state.query = parsed.query.to_string();

        let mut matches = find_ordered(
            &self.matcher,
            host,
            &self.state.query,
            self.state.mode,
            self.state.origin,
        );
        if let Some(limit) = self.options.max_results {
            matches.truncate(limit);
        }

        self.state.selected = if matches.is_empty() { None } else { Some(0) };
        self.state.matches = matches;
    }

    /// 次の候補へ（末尾から先頭へ折り返す）
    pub fn select_next(&mut self) {
        let len = self.state.matches.len();
        if len == 0 {
            return;
        }
        self.state.selected = Some(self.state.selected.map_or(0, |idx| (idx + 1) % len));
    }

    /// 前の候補へ（先頭から末尾へ折り返す）
    pub fn select_previous(&mut self) {
        let len = self.state.matches.len();
        if len == 0 {
            return;
        }
        self.state.selected = Some(match self.state.selected {
            Some(idx) if idx > 0 => idx - 1,
            _ => len - 1,
        });
    }

    /// 描画用の候補一覧
    pub fn suggestions(&self) -> Vec<Suggestion> {
        self.state
            .matches
            .iter()
            .map(|m| Suggestion::from_match(&self.state.query, m))
            .collect()
    }

    /// 検索語があるのに候補がない場合の表示
    pub fn empty_message(&self) -> Option<&'static str> {
        if self.state.active && !self.state.query.is_empty() && self.state.matches.is_empty() {
            Some(NOTHING_FOUND)
        } else {
            None
        }
    }

    /// 選択中のマッチへジャンプし、セッションを終える
    ///
    /// カーソルをマッチ位置へ移し、設定に応じて検索語部分を選択する
    pub fn choose<H: EditorHost>(&mut self, host: &mut H) -> Option<SearchMatch> {
        if !self.state.active {
            return None;
        }

        let chosen = self.selected_match().cloned();
        if let Some(m) = &chosen {
            host.set_cursor(m.pos);
            if self.options.select_on_choose {
                let (anchor, head) = m.query_range(self.state.query.chars().count());
                host.set_selection(anchor, head);
            }
            log::debug!("jumped to {:?}", m.pos);
        }

        self.state.reset();
        chosen
    }

    /// 検索を取り消す（ホストには触れない）
    pub fn cancel(&mut self) {
        self.state.reset();
    }
}
