use crate::domain::models::role::Role;

/// 라우트가 선언하는 필요 역할 집합
///
/// 사용자가 가진 역할 중 하나라도 집합에 포함되면 통과합니다 (OR 조건).
/// 생성자가 최소 한 개의 역할을 받으므로 빈 집합은 존재하지 않습니다.
#[derive(Debug, Clone, PartialEq)]
pub struct RequiredRoles(Vec<Role>);

impl RequiredRoles {
    pub fn single(role: Role) -> Self {
        Self(vec![role])
    }

    pub fn roles(&self) -> &[Role] {
        &self.0
    }
}
