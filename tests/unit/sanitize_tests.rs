/*!
 * Tests for the cleanup of service output
 */

use potrans::translation::sanitize_translation;

#[test]
fn test_sanitize_withFullWidthQuotes_shouldUseAsciiQuotes() {
    assert_eq!(sanitize_translation("Hello", "“你好”"), "\"你好\"");
    assert_eq!(sanitize_translation("It's", "‘它’"), "'它'");
}

#[test]
fn test_sanitize_withSurroundingWhitespace_shouldTrim() {
    assert_eq!(sanitize_translation("Save", "  保存 \n"), "保存");
}

#[test]
fn test_sanitize_withRawLineBreaks_shouldEscapeThem() {
    assert_eq!(
        sanitize_translation(r"First\nSecond", "第一\n第二"),
        r"第一\n第二"
    );
    assert_eq!(
        sanitize_translation(r"First\nSecond", "第一\r\n第二"),
        r"第一\n第二"
    );
}

#[test]
fn test_sanitize_withBrokenEscape_shouldRepairIt() {
    assert_eq!(
        sanitize_translation(r"First\nSecond", r"第一\ n第二"),
        r"第一\n第二"
    );
}

#[test]
fn test_sanitize_withSpaceBeforeEscape_shouldRemoveIt() {
    assert_eq!(
        sanitize_translation(r"First\nSecond", r"第一 \n第二"),
        r"第一\n第二"
    );
}

#[test]
fn test_sanitize_withSpaceBeforeEscapeInSource_shouldKeepIt() {
    assert_eq!(
        sanitize_translation(r"First \nSecond", r"第一 \n第二"),
        r"第一 \n第二"
    );
}

#[test]
fn test_sanitize_withCleanText_shouldNotChange() {
    assert_eq!(sanitize_translation("Confirm", "确认"), "确认");
}

#[test]
fn test_sanitize_withTrailingBackslash_shouldDropIt() {
    assert_eq!(sanitize_translation("Hello", r"你好\"), "你好");
    assert_eq!(sanitize_translation("Path", r"路径\\"), r"路径\\");
}

#[test]
fn test_sanitize_withTrailingBackslashInSource_shouldKeepIt() {
    assert_eq!(sanitize_translation(r"Folder \", r"文件夹 \"), r"文件夹 \");
}
