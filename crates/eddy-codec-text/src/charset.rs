use alloc::borrow::ToOwned;
use alloc::format;
use alloc::string::String;

use encoding_rs::Encoding;

use eddy_codecs::Bytes;
use eddy_codecs::codes;
use eddy_codecs::PayloadError;

/// 缺省字符集标签：对任意 8 位字节序列友好的通用文本编码。
pub const DEFAULT_CHARSET: &str = "utf-8";

/// `Charset` 将配置的字符集标签与解析出的编码句柄绑定为一个值对象。
///
/// # 设计动机（Why）
/// - 文本编解码器的全部配置就是一个字符集标签；标签需要持久化，
///   而解析出的 [`Encoding`] 句柄是进程内派生值，不可持久化；
/// - 将"标签 + 句柄"封装为单一类型，使二者的一致性成为构造不变量：
///   句柄只能经由 [`resolve`](Self::resolve) 从标签派生，重建实例时
///   自然完成重派生，无需任何反序列化后修复钩子。
///
/// # 契约说明（What）
/// - **不变量**：`encoding` 恒为 `name` 经标签表解析的结果；
/// - 标签解析遵循 Encoding Standard 的标签表，大小写不敏感，
///   `ascii`、`latin1` 等历史别名解析到 windows-1252 家族；
/// - 解析失败返回 [`codes::UNSUPPORTED_CHARSET`]，配置期致命，无回退。
///
/// # 风险提示（Trade-offs）
/// - 标签按配置原样保存（不规范化为编码规范名），换取与外部配置
///   系统的逐字节一致；比对字符集时应比较 [`encoding`](Self::encoding)
///   而非标签本身。
#[derive(Clone, Debug)]
pub struct Charset {
    name: String,
    encoding: &'static Encoding,
}

impl Charset {
    /// 按标签解析字符集。
    ///
    /// # 契约说明（What）
    /// - **输入**：任意字符集标签，如 `utf-8`、`ascii`、`shift_jis`；
    /// - **失败语义**：未知标签返回 [`codes::UNSUPPORTED_CHARSET`]，
    ///   不产生部分构造的实例。
    pub fn resolve(name: &str) -> Result<Self, PayloadError> {
        match Encoding::for_label_no_replacement(name.trim().as_bytes()) {
            Some(encoding) => Ok(Self {
                name: name.to_owned(),
                encoding,
            }),
            None => Err(PayloadError::new(
                codes::UNSUPPORTED_CHARSET,
                format!("charset label `{name}` does not resolve to a known encoding"),
            )),
        }
    }

    /// 返回缺省的 UTF-8 字符集。
    pub fn utf8() -> Self {
        Self {
            name: String::from(DEFAULT_CHARSET),
            encoding: encoding_rs::UTF_8,
        }
    }

    /// 返回配置时使用的标签。
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 返回解析出的编码句柄。
    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    /// 将文本编码为该字符集定义的字节序列。
    ///
    /// 无任何封皮：不加长度前缀、不加结束符。无法映射的字符按
    /// Encoding Standard 的编码替换策略处理。
    pub fn encode(&self, text: &str) -> Bytes {
        let (bytes, _, _) = self.encoding.encode(text);
        Bytes::from(bytes.into_owned())
    }

    /// 按该字符集解释字节序列。
    ///
    /// 畸形输入不报错：遵循 Encoding Standard 的解码替换策略，
    /// 以替换字符落位。BOM 视作负载字节，不做嗅探或剥除。
    pub fn decode(&self, payload: &[u8]) -> String {
        let (text, _) = self.encoding.decode_without_bom_handling(payload);
        text.into_owned()
    }
}
