#![allow(dead_code)]

use serde_json::{json, Value};

const COURSE_TITLES: [(&str, &str); 12] = [
    ("Angular Security Course - Web Security Fundamentals", "ADVANCED"),
    ("Angular PWA - Progressive Web Apps Course", "BEGINNER"),
    ("Angular Advanced Library Laboratory: Build Your Own Library", "ADVANCED"),
    ("Angular Material Course", "BEGINNER"),
    ("Angular Forms In Depth", "BEGINNER"),
    ("Angular Router In Depth", "BEGINNER"),
    ("Reactive Angular Course", "BEGINNER"),
    ("Angular Core Deep Dive", "BEGINNER"),
    ("RxJs In Practice Course", "BEGINNER"),
    ("NgRx (with NgRx Data) - The Complete Guide", "BEGINNER"),
    ("Angular Universal Course", "BEGINNER"),
    ("Angular Testing Course", "BEGINNER"),
];

/// 測試用課程資料，id 從 1 到 12
pub fn courses() -> Vec<Value> {
    COURSE_TITLES
        .iter()
        .enumerate()
        .map(|(index, (description, category))| {
            let id = index as u64 + 1;
            json!({
                "id": id,
                "titles": {
                    "description": description,
                    "longDescription": format!("Long description of course {}", id)
                },
                "iconUrl": format!("https://example.com/icons/{}.png", id),
                "category": category,
                "lessonsCount": 10,
                "seqNo": index,
                "url": format!("course-{}", id)
            })
        })
        .collect()
}

pub fn course(id: u64) -> Value {
    courses()
        .into_iter()
        .find(|c| c["id"] == json!(id))
        .unwrap_or_else(|| panic!("no fixture course with id {}", id))
}

pub fn lessons_for_course(course_id: u64) -> Vec<Value> {
    (1..=10)
        .map(|seq_no| {
            json!({
                "id": course_id * 100 + seq_no,
                "courseId": course_id,
                "description": format!("Lesson {} of course {}", seq_no, course_id),
                "duration": "4:17",
                "seqNo": seq_no
            })
        })
        .collect()
}

/// 將局部變更合併到課程上，模擬後端的 PUT 回應
pub fn merge(mut base: Value, changes: &Value) -> Value {
    if let (Some(target), Some(patch)) = (base.as_object_mut(), changes.as_object()) {
        for (key, value) in patch {
            target.insert(key.clone(), value.clone());
        }
    }
    base
}

/// 回覆一次固定原始回應的 TCP 伺服器，用於 httpmock 無法自訂的狀態說明。
/// 回傳 base url 與收到的原始請求
pub async fn serve_raw_once(
    status_line: &'static str,
    body: &'static str,
) -> (String, tokio::task::JoinHandle<String>) {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];

        // 讀完標頭與 Content-Length 指定的 body
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
            let text = String::from_utf8_lossy(&request);
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if request.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }

        let response = format!(
            "{}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();

        String::from_utf8_lossy(&request).into_owned()
    });

    (base_url, handle)
}
