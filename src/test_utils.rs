//! テスト用ユーティリティ
//!
//! 複数のテストモジュールで使用される `.mo` ビルダーとインメモリファイルシステムを提供します。
#![cfg(test)]

use std::cell::{
    Cell,
    RefCell,
};
use std::collections::HashMap;
use std::io;
use std::path::{
    Path,
    PathBuf,
};

use crate::fs::FileSystem;

/// `.mo` ファイルのバイト列を組み立てる
#[derive(Debug, Default)]
pub(crate) struct MoBuilder {
    /// (msgid, msgstr) のペア
    messages: Vec<(String, String)>,
    /// ビッグエンディアンで書き出すか
    big_endian: bool,
}

impl MoBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// ヘッダーエントリ（空の msgid）を追加
    pub(crate) fn header(self, header: &str) -> Self {
        self.message("", header)
    }

    pub(crate) fn message(mut self, msgid: &str, msgstr: &str) -> Self {
        self.messages.push((msgid.to_string(), msgstr.to_string()));
        self
    }

    pub(crate) const fn big_endian(mut self) -> Self {
        self.big_endian = true;
        self
    }

    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn build(&self) -> Vec<u8> {
        let to_bytes = |value: u32| {
            if self.big_endian { value.to_be_bytes() } else { value.to_le_bytes() }
        };

        let count = self.messages.len() as u32;
        let originals = 28;
        let translations = originals + count * 8;
        let strings_start = translations + count * 8;

        let mut original_descriptors = Vec::new();
        let mut translation_descriptors = Vec::new();
        let mut strings = Vec::new();
        for (msgid, msgstr) in &self.messages {
            for (text, descriptors) in
                [(msgid, &mut original_descriptors), (msgstr, &mut translation_descriptors)]
            {
                descriptors.extend(to_bytes(text.len() as u32));
                descriptors.extend(to_bytes(strings_start + strings.len() as u32));
                strings.extend_from_slice(text.as_bytes());
                strings.push(0);
            }
        }

        let mut data = Vec::new();
        for value in [0x9504_12de, 0, count, originals, translations, 0, 0] {
            data.extend(to_bytes(value));
        }
        data.extend(original_descriptors);
        data.extend(translation_descriptors);
        data.extend(strings);
        data
    }
}

/// インメモリの [`FileSystem`] 実装
///
/// 更新時刻を任意に設定でき、書き込み回数を記録します。
#[derive(Debug, Default)]
pub(crate) struct MemoryFileSystem {
    /// パス → (内容, 更新時刻)
    files: RefCell<HashMap<PathBuf, (Vec<u8>, i64)>>,
    /// 新規書き込みに付ける更新時刻
    now: Cell<i64>,
    /// `write` の成功回数
    writes: Cell<usize>,
    /// true の場合 `write` は常に失敗する
    read_only: Cell<bool>,
}

impl MemoryFileSystem {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// 以降の書き込みに付ける時刻を設定
    pub(crate) fn set_now(&self, now: i64) {
        self.now.set(now);
    }

    pub(crate) fn set_read_only(&self, read_only: bool) {
        self.read_only.set(read_only);
    }

    /// 任意の時刻でファイルを配置する（書き込み回数には数えない）
    pub(crate) fn put(&self, path: impl Into<PathBuf>, contents: Vec<u8>, modified: i64) {
        self.files.borrow_mut().insert(path.into(), (contents, modified));
    }

    pub(crate) fn touch(&self, path: &Path, modified: i64) {
        if let Some(entry) = self.files.borrow_mut().get_mut(path) {
            entry.1 = modified;
        }
    }

    pub(crate) fn contents(&self, path: &Path) -> Option<Vec<u8>> {
        self.files.borrow().get(path).map(|(contents, _)| contents.clone())
    }

    pub(crate) fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl FileSystem for MemoryFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.contents(path).ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        if self.read_only.get() {
            return Err(io::Error::from(io::ErrorKind::PermissionDenied));
        }
        self.files.borrow_mut().insert(path.to_path_buf(), (contents.to_vec(), self.now.get()));
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn delete(&self, path: &Path) -> io::Result<()> {
        self.files
            .borrow_mut()
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
    }

    fn modified_time(&self, path: &Path) -> io::Result<i64> {
        self.files
            .borrow()
            .get(path)
            .map(|(_, modified)| *modified)
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
    }
}
