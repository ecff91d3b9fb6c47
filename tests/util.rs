//! Shared test utilities for integration tests
//!
//! Provides common fixture creation and helper functions
//! used across multiple test files.

use assert_fs::prelude::*;

/// Create a scrape CSV covering the whole pipeline: a junk row ahead of the
/// first boundary, one review spanning two rows, dirty text (tags, entities,
/// emoji), a stopword, a single-character word, and two subjects whose
/// first-appearance order disagrees with their alphabetical order.
pub fn make_scrape_fixture() -> assert_fs::TempDir {
    let tmp = assert_fs::TempDir::new().expect("tempdir");

    // 소소카페 appears first but sorts after 가가상점, so output order
    // distinguishes first-appearance grouping from alphabetical grouping
    tmp.child("scrape.csv")
        .write_str(
            "name,blog_title,blog_description,content,link\n\
             소소카페,머리글,광고,광고 배너 텍스트,\n\
             소소카페,<b>소소카페</b> 후기,달콤한&nbsp;디저트,브라우니 맛있다 😀 브라우니,https://blog.naver.com/aaa/1\n\
             소소카페,,이어지는 글,브라우니 맛있다 맛있다,\n\
             소소카페,,마무리,커피 또 좋다,https://blog.naver.com/bbb/2\n\
             가가상점,,방문기,스콘 스콘 굿,https://blog.naver.com/ccc/3\n",
        )
        .expect("write scrape.csv");

    tmp
}
