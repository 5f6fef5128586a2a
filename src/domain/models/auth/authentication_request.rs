/// 인증 미들웨어 동작 모드
#[derive(Debug, Clone, PartialEq)]
pub enum AuthMode {
    /// 유효한 토큰이 없으면 401로 즉시 응답
    Required,
    /// 유효한 토큰이 있으면 사용자 정보를 저장하고, 없어도 요청을 진행
    Optional,
}
